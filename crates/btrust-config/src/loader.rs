//! Top-level configuration and file loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use btrust_core::validation::{Validate, ValidationError};

use crate::error::{ConfigError, ConfigResult, ValidateExt};
use crate::estimator::EstimatorConfig;
use crate::platform::PlatformConfig;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "BTRUST_CONFIG";

/// Complete workspace configuration.
///
/// Every section is optional in a file; missing sections and fields take
/// their built-in defaults.
///
/// ```toml
/// [estimator]
/// base_rate = 4.5
///
/// [estimator.unit_scale]
/// native = 100
/// stablecoin = 1
/// custom = 1
///
/// [platform]
/// fee_bps = 25
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BtrustConfig {
    /// Yield estimator parameters.
    pub estimator: EstimatorConfig,
    /// Platform fee and collateral parameters.
    pub platform: PlatformConfig,
}

impl BtrustConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a file, choosing the format by extension (`.json`, otherwise TOML).
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Loads `path` if given, else the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for BtrustConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.estimator.validate();
        errors.extend(self.platform.validate());
        errors
    }
}
