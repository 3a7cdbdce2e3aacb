/// Themed icons the tray can show, one per known thermal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    /// Shown for `balanced`.
    FaceSmile,
    /// Shown for `cool-bottom`.
    FaceCool,
    /// Shown for `quiet`.
    FaceNinja,
    /// Shown for `performance`.
    FaceDevilish,
}

impl IconId {
    /// Freedesktop icon-theme name.
    pub const fn theme_name(self) -> &'static str {
        match self {
            IconId::FaceSmile => "face-smile",
            IconId::FaceCool => "face-cool",
            IconId::FaceNinja => "face-ninja",
            IconId::FaceDevilish => "face-devilish",
        }
    }
}

/// Outcome of the icon policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSelection {
    /// Replace the tray icon.
    Set(IconId),
    /// Leave whatever icon is currently shown.
    NoChange,
}
