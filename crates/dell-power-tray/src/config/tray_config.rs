use crate::config::default_tooltip;

use serde::{Deserialize, Serialize};

/// Tray presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Tooltip shown when hovering the tray icon.
    #[serde(default = "default_tooltip")]
    pub tooltip: String,

    /// Preferred freedesktop icon theme, searched before the fallbacks.
    /// Empty means no preference.
    #[serde(default)]
    pub icon_theme: String,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            tooltip: default_tooltip(),
            icon_theme: String::new(),
        }
    }
}
