mod desktop;
mod icon_id;
mod policy;

pub use {
    desktop::{DESKTOP_SESSION_VAR, DesktopProbe, ICON_DESKTOP, desktop_is_kde, session_is_kde},
    icon_id::{IconId, IconSelection},
    policy::select_icon,
};
