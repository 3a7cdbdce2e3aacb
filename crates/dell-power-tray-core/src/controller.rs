//! Mode state reflection between the hardware and the tray.
//!
//! The controller owns the current mode of each axis and only ever updates
//! it from a hardware read. A requested mode is never displayed on faith:
//! after every switch the hardware is asked again, so a refused or coerced
//! request shows up as whatever the firmware actually reports.

use crate::{
    CoreResult, DesktopProbe, HardwareInterface, IconSelection, MenuSelection, ModeAction,
    ModeAxis, ModeId, PowerError, PresentationShell, format_label, header_text, select_icon,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// What a dispatched menu selection amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A mode switch ran to completion.
    Applied,
    /// The user asked to quit.
    Exit,
}

/// Owns the displayed mode state and keeps it in step with the hardware.
pub struct ModeController<H, S> {
    hardware: H,
    shell: S,
    desktop_is_kde: DesktopProbe,
    thermal: ModeId,
    battery: ModeId,
}

impl<H, S> ModeController<H, S>
where
    H: HardwareInterface,
    S: PresentationShell,
{
    /// Read both axes, build the menu and apply the icon policy.
    ///
    /// # Errors
    ///
    /// Returns the first hardware or shell failure; nothing is retried.
    #[instrument(skip_all)]
    pub fn new(mut hardware: H, shell: S, desktop_is_kde: DesktopProbe) -> CoreResult<Self> {
        let thermal = hardware.current(ModeAxis::Thermal)?;
        let battery = hardware.current(ModeAxis::Battery)?;

        info!(%thermal, %battery, "Initial modes read");

        let mut controller = Self {
            hardware,
            shell,
            desktop_is_kde,
            thermal,
            battery,
        };

        controller.build_menu()?;
        controller.refresh_icon()?;

        Ok(controller)
    }

    /// Route a clicked menu entry.
    #[track_caller]
    pub fn dispatch(&mut self, selection: MenuSelection) -> CoreResult<SelectionOutcome> {
        match selection {
            MenuSelection::Mode(ModeAction { axis, mode }) => {
                self.select_mode(axis, &mode)?;
                Ok(SelectionOutcome::Applied)
            }
            MenuSelection::Exit => Ok(SelectionOutcome::Exit),
        }
    }

    /// Switch an axis and resynchronize the display from the hardware.
    ///
    /// # Errors
    ///
    /// `UnknownMode` if `requested` is not enumerated for `axis`. Hardware
    /// failures are returned as-is and leave the displayed state untouched.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, axis: ModeAxis, requested: &ModeId) -> CoreResult<()> {
        if !self.hardware.modes(axis).contains(requested) {
            return Err(PowerError::UnknownMode {
                axis,
                mode: requested.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(%axis, %requested, "Setting mode");

        self.hardware.apply(axis, requested)?;
        let reported = self.hardware.current(axis)?;

        if reported != *requested {
            warn!(%axis, %requested, %reported, "Hardware reports a different mode than requested");
        }
        if !self.hardware.modes(axis).contains(&reported) {
            warn!(%axis, %reported, "Hardware reports an unlisted mode");
        }

        match axis {
            ModeAxis::Thermal => self.thermal = reported,
            ModeAxis::Battery => self.battery = reported,
        }

        let header = header_text(axis, self.current(axis));
        self.shell.set_header_text(axis, &header)?;

        if axis == ModeAxis::Thermal {
            self.refresh_icon()?;
        }

        Ok(())
    }

    /// Apply the icon policy to the current thermal mode.
    pub fn refresh_icon(&mut self) -> CoreResult<()> {
        match select_icon(self.thermal.as_str(), (self.desktop_is_kde)()) {
            IconSelection::Set(icon) => {
                debug!(thermal = %self.thermal, icon = icon.theme_name(), "Icon refresh");
                self.shell.set_tray_icon(icon)
            }
            IconSelection::NoChange => {
                debug!(thermal = %self.thermal, "Icon left unchanged");
                Ok(())
            }
        }
    }

    /// Last mode the hardware confirmed for an axis.
    pub fn current(&self, axis: ModeAxis) -> &ModeId {
        match axis {
            ModeAxis::Thermal => &self.thermal,
            ModeAxis::Battery => &self.battery,
        }
    }

    /// Display label of the current mode, recomputed on each call.
    #[cfg(test)]
    pub(crate) fn label(&self, axis: ModeAxis) -> String {
        format_label(self.current(axis).as_str())
    }

    /// The presentation shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    #[cfg(test)]
    pub(crate) fn hardware(&self) -> &H {
        &self.hardware
    }

    fn build_menu(&mut self) -> CoreResult<()> {
        for axis in ModeAxis::ALL {
            let header = header_text(axis, self.current(axis));
            self.shell.set_header_text(axis, &header)?;

            for mode in self.hardware.modes(axis) {
                let action = ModeAction {
                    axis,
                    mode: mode.clone(),
                };
                self.shell
                    .add_mode_action(axis, &format_label(mode.as_str()), action)?;
            }
        }

        self.shell.add_exit_action()
    }
}
