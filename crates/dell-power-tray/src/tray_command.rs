use tray_icon::menu::MenuId;

/// Events delivered to the main UI thread's event loop.
///
/// `tray-icon` reports menu clicks on its own channel; they are forwarded
/// here so the controller runs on the thread that owns the `TrayIcon`.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// A tray menu entry was clicked.
    MenuClicked(MenuId),
}
