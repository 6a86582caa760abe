//! CLI command implementations.

pub mod accrual;
pub mod collateral;
pub mod config;
pub mod estimate;
pub mod fee;
pub mod validate;

// Re-export submodules for convenience
pub use accrual::AccrualArgs;
pub use collateral::CollateralArgs;
pub use config::ConfigArgs;
pub use estimate::EstimateArgs;
pub use fee::FeeArgs;
pub use validate::ValidateArgs;

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::debug;

use btrust_config::BtrustConfig;
use btrust_core::types::CollateralType;
use btrust_issuance::IssuanceForm;

use crate::error::{CliError, CliResult};

/// Issuance request fields shared by `estimate` and `validate`.
///
/// Values are taken as typed; unusable numbers are handled by the command.
#[derive(Args, Debug, Default)]
pub struct IssuanceArgs {
    /// Face value per unit
    #[arg(short, long, allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Number of units to issue
    #[arg(short, long, allow_hyphen_values = true)]
    pub supply: Option<String>,

    /// Term in months (1, 3, 6 or 12)
    #[arg(short, long, allow_hyphen_values = true)]
    pub duration: Option<String>,

    /// Collateral amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub collateral: Option<String>,

    /// Collateral type: native, stablecoin, custom, or a token ticker
    #[arg(short = 't', long)]
    pub collateral_type: Option<String>,

    /// JSON request file, or `-` for stdin. Flags override its fields.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl IssuanceArgs {
    /// Builds the issuance form from the input file and flags.
    pub fn to_form(&self) -> CliResult<IssuanceForm> {
        let mut form = match &self.input {
            Some(path) => read_form(path)?,
            None => IssuanceForm::new(),
        };

        if let Some(p) = &self.principal {
            form = form.with_principal(p.as_str());
        }
        if let Some(s) = &self.supply {
            form = form.with_total_supply(s.as_str());
        }
        if let Some(d) = &self.duration {
            form = form.with_duration_months(d.as_str());
        }
        if let Some(c) = &self.collateral {
            form = form.with_collateral_amount(c.as_str());
        }
        if let Some(t) = &self.collateral_type {
            form = form.with_collateral_type(CollateralType::parse_lenient(t));
        }

        debug!(?form, "issuance form");
        Ok(form)
    }
}

fn read_form(path: &Path) -> CliResult<IssuanceForm> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::InputRead {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::InputRead {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(serde_json::from_str(&text)?)
}

/// Loads configuration from an explicit path, else the user config file if
/// present, else the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> CliResult<BtrustConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading configuration");
        return Ok(BtrustConfig::from_file(path)?);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading user configuration");
            Ok(BtrustConfig::from_file(&path)?)
        }
        _ => Ok(BtrustConfig::default()),
    }
}

/// Location of the per-user configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("btrust").join("config.toml"))
}

/// Parses an RFC 3339 timestamp.
pub fn parse_timestamp(s: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CliError::InvalidTimestamp(s.to_string()))
}
