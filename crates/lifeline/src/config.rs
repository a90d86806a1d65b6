//! Configuration management for lifeline.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! emergency number and chat recipient live here as named defaults rather
//! than literals scattered through the link builders, so regional
//! reconfiguration is a config edit rather than a code change.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "lifeline";

/// Default emergency dial/SMS number.
const DEFAULT_EMERGENCY_NUMBER: &str = "112";

/// Default chat-app recipient for location sharing.
const DEFAULT_CHAT_RECIPIENT: &str = "919057301529";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LIFELINE_`, nesting separated
///    by `__`, e.g. `LIFELINE_CONTACTS__EMERGENCY_NUMBER`)
/// 2. TOML config file at `~/.config/lifeline/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Contact numbers the deep links target.
    pub contacts: ContactsConfig,
    /// Location provider configuration.
    pub location: LocationConfig,
}

/// Contact numbers for the dial, SMS, and chat handoffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// The emergency number targeted by the dialer and SMS links.
    pub emergency_number: String,
    /// The chat-app recipient targeted by the location-sharing link.
    pub chat_recipient: String,
}

/// Configuration for the CLI's fixed location provider.
///
/// Terminals have no geolocation service, so the one-shot position fix
/// comes from these coordinates. Leaving them unset makes every location
/// query fail with "position unavailable".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Fixed latitude in degrees.
    pub latitude: Option<f64>,
    /// Fixed longitude in degrees.
    pub longitude: Option<f64>,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            emergency_number: DEFAULT_EMERGENCY_NUMBER.to_string(),
            chat_recipient: DEFAULT_CHAT_RECIPIENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `LIFELINE_`, nesting
    ///    separated by `__`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("LIFELINE_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        validate_number("contacts.emergency_number", &self.contacts.emergency_number)?;
        validate_number("contacts.chat_recipient", &self.contacts.chat_recipient)?;

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(Error::ConfigValidation {
                        message: format!("location.latitude ({lat}) must be within -90..=90"),
                    });
                }
                if !(-180.0..=180.0).contains(&lng) {
                    return Err(Error::ConfigValidation {
                        message: format!("location.longitude ({lng}) must be within -180..=180"),
                    });
                }
            }
            (None, None) => {}
            _ => {
                return Err(Error::ConfigValidation {
                    message: "location.latitude and location.longitude must be set together"
                        .to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the fixed coordinates, if both are configured.
    #[must_use]
    pub fn fixed_coordinates(&self) -> Option<(f64, f64)> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Check that a configured contact number is non-empty and digits only.
fn validate_number(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::ConfigValidation {
            message: format!("{key} must not be empty"),
        });
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ConfigValidation {
            message: format!("{key} ({value}) must contain digits only"),
        });
    }
    Ok(())
}
