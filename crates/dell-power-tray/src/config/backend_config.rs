use crate::config::{
    default_battery_ctl, default_battery_modes, default_thermal_ctl, default_thermal_modes,
};

use dell_power_tray_core::{ModeAxis, ModeId, SmbiosCtl};
use serde::{Deserialize, Serialize};

/// libsmbios tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Path or name of `smbios-thermal-ctl`.
    #[serde(default = "default_thermal_ctl")]
    pub thermal_ctl: String,

    /// Path or name of `smbios-battery-ctl`.
    #[serde(default = "default_battery_ctl")]
    pub battery_ctl: String,

    /// Command prepended to every tool call, e.g. `["pkexec"]`.
    #[serde(default)]
    pub elevate: Vec<String>,

    /// Selectable thermal modes, in menu order.
    #[serde(default = "default_thermal_modes")]
    pub thermal_modes: Vec<String>,

    /// Selectable battery charging modes, in menu order.
    #[serde(default = "default_battery_modes")]
    pub battery_modes: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            thermal_ctl: default_thermal_ctl(),
            battery_ctl: default_battery_ctl(),
            elevate: Vec::new(),
            thermal_modes: default_thermal_modes(),
            battery_modes: default_battery_modes(),
        }
    }
}

impl BackendConfig {
    /// Build the hardware driver described by this section.
    pub fn build_backend(&self) -> SmbiosCtl {
        let modes = |list: &[String]| -> Vec<ModeId> {
            list.iter().map(|mode| ModeId::from(mode.as_str())).collect()
        };

        SmbiosCtl::new(&self.thermal_ctl, &self.battery_ctl)
            .with_elevation(self.elevate.clone())
            .with_modes(ModeAxis::Thermal, modes(&self.thermal_modes))
            .with_modes(ModeAxis::Battery, modes(&self.battery_modes))
    }
}
