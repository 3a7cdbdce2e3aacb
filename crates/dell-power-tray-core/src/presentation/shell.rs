use crate::{CoreResult, IconId, ModeAction, ModeAxis};

/// The tray widget as seen by the controller.
///
/// Each axis has one named menu header holding that axis's mode entries.
/// Clicks travel back to the controller as [`MenuSelection`](crate::MenuSelection)
/// values built from the records passed to [`add_mode_action`](Self::add_mode_action).
pub trait PresentationShell {
    /// Replace the text of an axis's menu header.
    fn set_header_text(&mut self, axis: ModeAxis, text: &str) -> CoreResult<()>;

    /// Show a themed icon in the tray.
    fn set_tray_icon(&mut self, icon: IconId) -> CoreResult<()>;

    /// Append an entry under an axis's header, bound to `action`.
    fn add_mode_action(
        &mut self,
        axis: ModeAxis,
        label: &str,
        action: ModeAction,
    ) -> CoreResult<()>;

    /// Append the entry that quits the application.
    fn add_exit_action(&mut self) -> CoreResult<()>;
}
