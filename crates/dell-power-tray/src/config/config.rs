//! Configuration management for dell-power-tray.
//!
//! Handles loading and saving the TOML configuration file from the user's
//! config directory, with validation and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{BackendConfig, TrayConfig},
};

use std::{fs, io::Write, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hardware tool settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Tray presentation settings.
    #[serde(default)]
    pub tray: TrayConfig,
}

impl Config {
    /// Load configuration from disk, creating the default file if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::from_toml(&contents)?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Parse and validate a TOML document. Missing fields take defaults.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Reject settings the tray cannot run with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let backend = &self.backend;

        let problem = if backend.thermal_ctl.trim().is_empty() {
            Some("backend.thermal_ctl is empty")
        } else if backend.battery_ctl.trim().is_empty() {
            Some("backend.battery_ctl is empty")
        } else if backend.thermal_modes.is_empty() {
            Some("backend.thermal_modes lists no modes")
        } else if backend.battery_modes.is_empty() {
            Some("backend.battery_modes lists no modes")
        } else if backend
            .thermal_modes
            .iter()
            .chain(&backend.battery_modes)
            .any(|mode| mode.trim().is_empty())
        {
            Some("mode lists contain an empty token")
        } else {
            None
        };

        match problem {
            Some(reason) => Err(AppError::ConfigError {
                reason: reason.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "dell-power-tray", "Dell-Power-Tray")
            .ok_or_else(|| AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
