//! Freedesktop icon-theme lookup for the tray icon.
//!
//! `tray-icon` takes raw RGBA pixels, so themed names such as `face-smile`
//! are resolved to PNG files under the XDG icon directories and decoded.
//! When no theme ships the icon a flat placeholder disc is drawn instead.

use crate::{AppError, AppResult};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use dell_power_tray_core::IconId;
use directories::BaseDirs;
use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};
use tray_icon::Icon;

/// Themes searched after the preferred one. Only PNG themes are useful here.
const FALLBACK_THEMES: [&str; 3] = ["oxygen", "Adwaita", "hicolor"];

/// Sizes tried in order, closest to a panel icon first.
const SIZES: [&str; 6] = ["22x22", "24x24", "32x32", "16x16", "48x48", "64x64"];

const CONTEXTS: [&str; 3] = ["emotes", "status", "apps"];

// Oxygen 5 nests its sizes under `base/`.
const LAYOUTS: [&str; 2] = ["", "base"];

const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

const PLACEHOLDER_SIZE: u32 = 22;

/// Resolves themed icon names to tray icons.
#[derive(Debug, Clone)]
pub struct IconTheme {
    preferred: Option<String>,
    roots: Vec<PathBuf>,
}

impl IconTheme {
    /// Lookup over the user's XDG icon directories.
    ///
    /// An empty `preferred` theme means no preference.
    pub fn new(preferred: &str) -> Self {
        Self::with_roots(preferred, icon_roots())
    }

    /// Lookup over explicit icon root directories.
    pub fn with_roots(preferred: &str, roots: Vec<PathBuf>) -> Self {
        let preferred = Some(preferred.trim())
            .filter(|theme| !theme.is_empty())
            .map(str::to_string);

        Self { preferred, roots }
    }

    /// Every path probed for `name`, in search order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file = format!("{}.png", name);
        let themes: Vec<&str> = self
            .preferred
            .as_deref()
            .into_iter()
            .chain(FALLBACK_THEMES)
            .collect();

        let mut paths = Vec::new();
        for root in &self.roots {
            for theme in &themes {
                for layout in LAYOUTS {
                    for size in SIZES {
                        for context in CONTEXTS {
                            paths.push(
                                root.join(theme)
                                    .join(layout)
                                    .join(size)
                                    .join(context)
                                    .join(&file),
                            );
                        }
                    }
                }
            }
        }
        paths.push(Path::new("/usr/share/pixmaps").join(&file));

        paths
    }

    /// First existing file for `name`.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.candidates(name).into_iter().find(|path| path.is_file())
    }

    /// Tray icon for `icon`, falling back to a placeholder.
    #[track_caller]
    pub fn load(&self, icon: IconId) -> AppResult<Icon> {
        let name = icon.theme_name();

        let image = match self.find(name) {
            Some(path) => match image::open(&path) {
                Ok(decoded) => {
                    debug!(icon = name, path = ?path, "Themed icon loaded");
                    decoded.into_rgba8()
                }
                Err(e) => {
                    warn!(icon = name, path = ?path, error = %e, "Failed to decode themed icon");
                    placeholder(icon)
                }
            },
            None => {
                debug!(icon = name, "Themed icon not found, using placeholder");
                placeholder(icon)
            }
        };

        let (width, height) = (image.width(), image.height());

        Icon::from_rgba(image.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// A filled disc whose colour tells the thermal modes apart.
pub fn placeholder(icon: IconId) -> RgbaImage {
    let [r, g, b] = match icon {
        IconId::FaceSmile => [250, 200, 40],
        IconId::FaceCool => [60, 140, 230],
        IconId::FaceNinja => [70, 70, 80],
        IconId::FaceDevilish => [210, 50, 40],
    };

    let center = PLACEHOLDER_SIZE as f32 / 2.0;
    let radius = center - 1.0;

    RgbaImage::from_fn(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy <= radius * radius {
            Rgba([r, g, b, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn icon_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(base) = BaseDirs::new() {
        roots.push(base.home_dir().join(".icons"));
        roots.push(base.data_dir().join("icons"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|dirs| !dirs.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_DIRS.to_string());

    roots.extend(
        data_dirs
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join("icons")),
    );

    roots
}
