use crate::{ModeAxis, ModeId};

/// A menu entry's bound target: switch `axis` to `mode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeAction {
    /// Axis the entry belongs to.
    pub axis: ModeAxis,
    /// Mode the entry selects.
    pub mode: ModeId,
}

/// Everything a click on the tray menu can mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSelection {
    /// A mode entry was clicked.
    Mode(ModeAction),
    /// The exit entry was clicked.
    Exit,
}
