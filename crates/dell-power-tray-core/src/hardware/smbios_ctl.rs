//! [`HardwareInterface`] backed by the libsmbios command-line tools.
//!
//! Thermal modes go through `smbios-thermal-ctl`, battery charging modes
//! through `smbios-battery-ctl`. Both tools need root; set an elevation
//! prefix such as `pkexec` when the tray runs unprivileged.

use crate::{
    CoreResult, HardwareInterface, ModeAxis, ModeId, PowerError, hardware::parse_current_mode,
};

use std::{panic::Location, process::Command};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Thermal modes supported by `smbios-thermal-ctl`.
pub const DEFAULT_THERMAL_MODES: [&str; 4] = ["balanced", "cool-bottom", "quiet", "performance"];

/// Charging modes supported by `smbios-battery-ctl`.
pub const DEFAULT_BATTERY_MODES: [&str; 5] =
    ["standard", "express", "primarily_ac", "adaptive", "custom"];

const THERMAL_MARKER: &str = "Current Thermal Mode";
const BATTERY_MARKER: &str = "Charging mode";

/// libsmbios tool driver.
#[derive(Debug, Clone)]
pub struct SmbiosCtl {
    thermal_ctl: String,
    battery_ctl: String,
    elevate: Vec<String>,
    thermal_modes: Vec<ModeId>,
    battery_modes: Vec<ModeId>,
}

impl SmbiosCtl {
    /// Driver using the given tool paths and the default mode lists.
    pub fn new(thermal_ctl: impl Into<String>, battery_ctl: impl Into<String>) -> Self {
        Self {
            thermal_ctl: thermal_ctl.into(),
            battery_ctl: battery_ctl.into(),
            elevate: Vec::new(),
            thermal_modes: DEFAULT_THERMAL_MODES.into_iter().map(ModeId::from).collect(),
            battery_modes: DEFAULT_BATTERY_MODES.into_iter().map(ModeId::from).collect(),
        }
    }

    /// Prefix every invocation with this command (e.g. `["pkexec"]`).
    pub fn with_elevation(mut self, elevate: Vec<String>) -> Self {
        self.elevate = elevate;
        self
    }

    /// Replace the selectable modes of one axis.
    pub fn with_modes(mut self, axis: ModeAxis, modes: Vec<ModeId>) -> Self {
        match axis {
            ModeAxis::Thermal => self.thermal_modes = modes,
            ModeAxis::Battery => self.battery_modes = modes,
        }
        self
    }

    /// The full argv for one tool invocation, elevation prefix included.
    pub fn command_line(&self, axis: ModeAxis, set: Option<&ModeId>) -> Vec<String> {
        let tool = match axis {
            ModeAxis::Thermal => &self.thermal_ctl,
            ModeAxis::Battery => &self.battery_ctl,
        };

        let arg = match (axis, set) {
            (ModeAxis::Thermal, None) => "-g".to_string(),
            (ModeAxis::Thermal, Some(mode)) => format!("--set-thermal-mode={}", mode),
            (ModeAxis::Battery, None) => "--get-charging-cfg".to_string(),
            (ModeAxis::Battery, Some(mode)) => format!("--set-charging-mode={}", mode),
        };

        self.elevate
            .iter()
            .cloned()
            .chain([tool.clone(), arg])
            .collect()
    }

    /// Extract the current mode of `axis` from a captured tool report.
    #[track_caller]
    pub fn parse_report(&self, axis: ModeAxis, report: &str) -> CoreResult<ModeId> {
        let marker = match axis {
            ModeAxis::Thermal => THERMAL_MARKER,
            ModeAxis::Battery => BATTERY_MARKER,
        };

        parse_current_mode(report, marker, self.modes(axis)).ok_or_else(|| {
            PowerError::UnrecognizedOutput {
                axis,
                output: report.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn run(&self, argv: &[String]) -> CoreResult<String> {
        let Some((program, args)) = argv.split_first() else {
            return Err(PowerError::CommandSpawn {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        debug!(?argv, "Running hardware tool");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| PowerError::CommandSpawn {
                program: program.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !output.status.success() {
            return Err(PowerError::CommandFailed {
                program: argv.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HardwareInterface for SmbiosCtl {
    fn modes(&self, axis: ModeAxis) -> &[ModeId] {
        match axis {
            ModeAxis::Thermal => &self.thermal_modes,
            ModeAxis::Battery => &self.battery_modes,
        }
    }

    #[instrument(skip(self))]
    fn current(&mut self, axis: ModeAxis) -> CoreResult<ModeId> {
        let report = self.run(&self.command_line(axis, None))?;
        let mode = self.parse_report(axis, &report)?;

        debug!(%axis, %mode, "Hardware mode read");

        Ok(mode)
    }

    #[instrument(skip(self))]
    fn apply(&mut self, axis: ModeAxis, mode: &ModeId) -> CoreResult<()> {
        self.run(&self.command_line(axis, Some(mode)))?;
        Ok(())
    }
}
