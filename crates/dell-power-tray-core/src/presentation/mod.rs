mod menu_selection;
mod shell;

pub use {
    menu_selection::{MenuSelection, ModeAction},
    shell::PresentationShell,
};
