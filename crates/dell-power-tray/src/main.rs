//! Dell Power Tray: switch Dell thermal and battery modes from the system tray.

mod cli;
mod config;
mod desktop_entry;
mod error;
mod icon_theme;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    cli::Args,
    desktop_entry::DesktopEntry,
    error::{AppError, Result as AppResult},
    icon_theme::IconTheme,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::Config;

use clap::Parser;
use dell_power_tray_core::{ModeController, SelectionOutcome, SmbiosCtl, desktop_is_kde};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use tray_icon::menu::MenuEvent;

const DEFAULT_LOG_FILTER: &str = "dell_power_tray=info,dell_power_tray_core=info";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();

    if args.install {
        std::process::exit(match install_launcher() {
            Ok(()) => 0,
            Err(e) => {
                error!("Failed to install desktop entry: {:?}", e);
                1
            }
        });
    }

    if args.uninstall {
        std::process::exit(match uninstall_launcher() {
            Ok(()) => 0,
            Err(e) => {
                error!("Failed to remove desktop entry: {:?}", e);
                1
            }
        });
    }

    run_tray();
}

fn install_launcher() -> AppResult<()> {
    let dir = desktop_entry::autostart_dir()?;
    DesktopEntry::for_current_exe()?.install(&dir)?;
    Ok(())
}

fn uninstall_launcher() -> AppResult<()> {
    let dir = desktop_entry::autostart_dir()?;
    desktop_entry::uninstall(&dir)?;
    Ok(())
}

fn build_controller(config: &Config) -> AppResult<ModeController<SmbiosCtl, TrayManager>> {
    let hardware = config.backend.build_backend();
    let tray = TrayManager::new(&config.tray.tooltip, IconTheme::new(&config.tray.icon_theme))?;

    Ok(ModeController::new(hardware, tray, Box::new(desktop_is_kde))?)
}

/// Run the tray until Exit is chosen. Never returns.
fn run_tray() -> ! {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // Menu clicks arrive on tray-icon's channel; hop them onto the event loop
    // so the controller and the !Send TrayIcon stay on the main thread.
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = proxy.send_event(TrayCommand::MenuClicked(event.id));
    }));

    let mut controller: Option<ModeController<SmbiosCtl, TrayManager>> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => match build_controller(&config) {
                Ok(c) => {
                    info!("Dell Power Tray started");
                    controller = Some(c);
                }
                Err(e) => {
                    error!("Failed to start tray: {:?}", e);
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            },
            Event::UserEvent(TrayCommand::MenuClicked(id)) => {
                let Some(ctrl) = controller.as_mut() else {
                    return;
                };

                let Some(selection) = ctrl.shell().resolve(&id) else {
                    debug!(menu_id = ?id, "Click on unbound menu entry");
                    return;
                };

                match ctrl.dispatch(selection) {
                    Ok(SelectionOutcome::Applied) => {}
                    Ok(SelectionOutcome::Exit) => {
                        info!("Exit requested from tray menu");
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                    Err(e) => error!(error = ?e, "Failed to apply mode selection"),
                }
            }
            _ => {}
        }
    })
}
