//! Autostart launcher installed by `--install`.

use crate::{AppError, AppResult};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// File name of the launcher inside the autostart directory.
pub const DESKTOP_FILE_NAME: &str = "dell-power-tray.desktop";

/// A freedesktop launcher pointing at a tray executable.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    exec: PathBuf,
}

impl DesktopEntry {
    /// Launcher for the given executable.
    pub fn new(exec: impl Into<PathBuf>) -> Self {
        Self { exec: exec.into() }
    }

    /// Launcher for the running executable.
    #[track_caller]
    pub fn for_current_exe() -> AppResult<Self> {
        let exe = std::env::current_exe().map_err(|e| AppError::DesktopEntryError {
            reason: format!("Failed to locate current executable: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::new(exe))
    }

    /// The `.desktop` file contents.
    pub fn render(&self) -> String {
        let exec = self.exec.display().to_string();
        let exec = if exec.contains(char::is_whitespace) {
            format!("\"{}\"", exec)
        } else {
            exec
        };

        format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name=Dell Power Tray\n\
             Comment=Switch Dell thermal and battery modes from the system tray\n\
             Exec={}\n\
             Icon=face-smile\n\
             Terminal=false\n\
             Categories=Utility;System;\n\
             X-GNOME-Autostart-enabled=true\n",
            exec
        )
    }

    /// Write the launcher into `dir`, creating it if needed.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn install(&self, dir: &Path) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;

        let path = dir.join(DESKTOP_FILE_NAME);
        fs::write(&path, self.render())?;

        info!(path = ?path, "Desktop entry installed");

        Ok(path)
    }
}

/// Remove the launcher from `dir`. Returns whether a file was removed.
#[track_caller]
#[instrument]
pub fn uninstall(dir: &Path) -> AppResult<bool> {
    let path = dir.join(DESKTOP_FILE_NAME);

    if !path.exists() {
        info!(path = ?path, "No desktop entry to remove");
        return Ok(false);
    }

    fs::remove_file(&path)?;
    info!(path = ?path, "Desktop entry removed");

    Ok(true)
}

/// `~/.config/autostart` or the platform equivalent.
#[track_caller]
pub fn autostart_dir() -> AppResult<PathBuf> {
    let base = BaseDirs::new().ok_or_else(|| AppError::DesktopEntryError {
        reason: "Failed to get user config directory".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(base.config_dir().join("autostart"))
}
