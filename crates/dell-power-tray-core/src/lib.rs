//! Dell Power Tray Core Library
//!
//! Mode-state model behind the Dell power tray: label formatting, the
//! thermal icon policy, the hardware boundary (with a libsmbios tool
//! backend) and the controller that keeps the tray in step with the
//! firmware.
//!
//! # Example
//!
//! ```no_run
//! use dell_power_tray_core::{
//!     CoreResult, HardwareInterface, ModeAxis, ModeId, SmbiosCtl,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let mut hardware = SmbiosCtl::new("smbios-thermal-ctl", "smbios-battery-ctl");
//!
//!     hardware.apply(ModeAxis::Thermal, &ModeId::from("quiet"))?;
//!     let mode = hardware.current(ModeAxis::Thermal)?;
//!
//!     println!("Thermal mode is now {}", mode);
//!     Ok(())
//! }
//! ```

mod controller;
mod error;
mod hardware;
mod icon;
mod mode;
mod presentation;

pub use {
    controller::{ModeController, SelectionOutcome},
    error::PowerError,
    error::Result as CoreResult,
    hardware::{DEFAULT_BATTERY_MODES, DEFAULT_THERMAL_MODES, HardwareInterface, SmbiosCtl},
    icon::{
        DESKTOP_SESSION_VAR, DesktopProbe, ICON_DESKTOP, IconId, IconSelection, desktop_is_kde,
        select_icon, session_is_kde,
    },
    mode::{ModeAxis, ModeId, format_label, header_text},
    presentation::{MenuSelection, ModeAction, PresentationShell},
};

#[cfg(test)]
mod tests;
