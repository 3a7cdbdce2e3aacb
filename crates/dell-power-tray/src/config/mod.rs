mod backend_config;
#[allow(clippy::module_inception)]
mod config;
mod tray_config;

pub(crate) use {backend_config::BackendConfig, config::Config, tray_config::TrayConfig};

pub(crate) const DEFAULT_THERMAL_CTL: &str = "smbios-thermal-ctl";
pub(crate) const DEFAULT_BATTERY_CTL: &str = "smbios-battery-ctl";
pub(crate) const DEFAULT_TOOLTIP: &str = "Dell Power Tray";

pub(crate) fn default_thermal_ctl() -> String {
    DEFAULT_THERMAL_CTL.to_string()
}

pub(crate) fn default_battery_ctl() -> String {
    DEFAULT_BATTERY_CTL.to_string()
}

pub(crate) fn default_thermal_modes() -> Vec<String> {
    dell_power_tray_core::DEFAULT_THERMAL_MODES
        .iter()
        .map(|mode| mode.to_string())
        .collect()
}

pub(crate) fn default_battery_modes() -> Vec<String> {
    dell_power_tray_core::DEFAULT_BATTERY_MODES
        .iter()
        .map(|mode| mode.to_string())
        .collect()
}

pub(crate) fn default_tooltip() -> String {
    DEFAULT_TOOLTIP.to_string()
}
