use crate::{IconId, IconSelection};

/// Pick the tray icon for a thermal mode.
///
/// Icons are only changed on KDE sessions, where the face-* names are known
/// to exist in the icon theme. Unlisted modes leave the icon alone.
pub fn select_icon(thermal_mode: &str, desktop_is_kde: bool) -> IconSelection {
    if !desktop_is_kde {
        return IconSelection::NoChange;
    }

    let icon = match thermal_mode {
        "balanced" => IconId::FaceSmile,
        "cool-bottom" => IconId::FaceCool,
        "quiet" => IconId::FaceNinja,
        "performance" => IconId::FaceDevilish,
        _ => return IconSelection::NoChange,
    };

    IconSelection::Set(icon)
}
