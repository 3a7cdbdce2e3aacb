//! System tray icon with one submenu per mode axis.
//!
//! Menu layout: the thermal header, the battery header (each a submenu of
//! mode entries), then Exit. Entries are remembered by `MenuId`, so a click
//! resolves straight to the record it was bound to.

use crate::{AppError, AppResult, IconTheme};

use std::{collections::HashMap, panic::Location};

use dell_power_tray_core::{
    CoreResult, IconId, MenuSelection, ModeAction, ModeAxis, PowerError, PresentationShell,
};
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, Submenu};
use tray_icon::{TrayIcon, TrayIconBuilder};

/// Icon shown before the first policy refresh.
const STARTUP_ICON: IconId = IconId::FaceSmile;

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu: Menu,
    thermal_header: Submenu,
    battery_header: Submenu,
    bindings: HashMap<MenuId, MenuSelection>,
    icons: IconTheme,
}

impl TrayManager {
    /// Create the tray icon with empty axis headers.
    #[track_caller]
    #[instrument(skip(icons))]
    pub fn new(tooltip: &str, icons: IconTheme) -> AppResult<Self> {
        let menu = Menu::new();

        let thermal_header = Submenu::new(format!("Current {} Mode:", ModeAxis::Thermal.title()), true);
        let battery_header = Submenu::new(format!("Current {} Mode:", ModeAxis::Battery.title()), true);

        menu.append(&thermal_header).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add thermal menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&battery_header).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add battery menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = icons.load(STARTUP_ICON)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(tooltip)
            .with_menu(Box::new(menu.clone()))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            menu,
            thermal_header,
            battery_header,
            bindings: HashMap::new(),
            icons,
        })
    }

    /// The record bound to a clicked entry, if it is one of ours.
    pub fn resolve(&self, id: &MenuId) -> Option<MenuSelection> {
        self.bindings.get(id).cloned()
    }

    fn header(&self, axis: ModeAxis) -> &Submenu {
        match axis {
            ModeAxis::Thermal => &self.thermal_header,
            ModeAxis::Battery => &self.battery_header,
        }
    }
}

impl PresentationShell for TrayManager {
    fn set_header_text(&mut self, axis: ModeAxis, text: &str) -> CoreResult<()> {
        self.header(axis).set_text(text);
        debug!(%axis, text, "Menu header updated");
        Ok(())
    }

    #[track_caller]
    fn set_tray_icon(&mut self, icon: IconId) -> CoreResult<()> {
        let image = self.icons.load(icon).map_err(|e| PowerError::Presentation {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.tray_icon
            .set_icon(Some(image))
            .map_err(|e| PowerError::Presentation {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(icon = icon.theme_name(), "Tray icon updated");

        Ok(())
    }

    #[track_caller]
    fn add_mode_action(
        &mut self,
        axis: ModeAxis,
        label: &str,
        action: ModeAction,
    ) -> CoreResult<()> {
        let item = MenuItem::new(label, true, None);

        self.header(axis)
            .append(&item)
            .map_err(|e| PowerError::Presentation {
                reason: format!("Failed to add {} entry {}: {}", axis, label, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.bindings
            .insert(item.id().clone(), MenuSelection::Mode(action));

        Ok(())
    }

    #[track_caller]
    fn add_exit_action(&mut self) -> CoreResult<()> {
        let item = MenuItem::new("Exit", true, None);

        self.menu
            .append(&item)
            .map_err(|e| PowerError::Presentation {
                reason: format!("Failed to add exit menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.bindings.insert(item.id().clone(), MenuSelection::Exit);

        Ok(())
    }
}
