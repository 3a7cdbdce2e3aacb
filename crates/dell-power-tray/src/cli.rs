use clap::Parser;

/// Command-line arguments.
///
/// Without a flag the tray starts.
#[derive(Parser, Debug)]
#[command(name = "dell-power-tray")]
#[command(about = "Switch Dell thermal and battery modes from the system tray")]
#[command(version)]
pub struct Args {
    /// Install the autostart desktop entry and exit
    #[arg(long, conflicts_with = "uninstall")]
    pub install: bool,

    /// Remove the autostart desktop entry and exit
    #[arg(long)]
    pub uninstall: bool,
}
