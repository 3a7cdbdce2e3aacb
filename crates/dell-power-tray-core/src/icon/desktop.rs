//! Desktop session detection for the icon gate.

/// Environment variable naming the active desktop session.
pub const DESKTOP_SESSION_VAR: &str = "XDG_CURRENT_DESKTOP";

/// Session token on which icon updates are enabled.
pub const ICON_DESKTOP: &str = "KDE";

/// Injected predicate answering "is the icon gate open right now?".
///
/// Evaluated on every icon refresh, never cached.
pub type DesktopProbe = Box<dyn Fn() -> bool>;

/// Read [`DESKTOP_SESSION_VAR`] from the process environment.
pub fn desktop_is_kde() -> bool {
    std::env::var(DESKTOP_SESSION_VAR).is_ok_and(|session| session_is_kde(&session))
}

/// Exact comparison against [`ICON_DESKTOP`].
pub fn session_is_kde(session: &str) -> bool {
    session == ICON_DESKTOP
}
