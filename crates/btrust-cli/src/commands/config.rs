//! Config command implementation.
//!
//! Shows the effective configuration, checks configuration files and
//! reports where the per-user file lives.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use btrust_config::{BtrustConfig, ConfigError, CONFIG_ENV_VAR};

use crate::cli::OutputFormat;
use crate::commands::default_config_path;
use crate::error::CliError;
use crate::output::{
    print_error, print_header, print_info, print_output, print_success, print_warning, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Check a configuration file
    Validate(ValidateFileArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateFileArgs {
    /// Configuration file (TOML, or JSON by extension)
    pub file: PathBuf,
}

/// Execute the config command.
pub fn execute(
    args: &ConfigArgs,
    config: &BtrustConfig,
    explicit: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    match &args.command {
        ConfigCommand::Show => execute_show(config, format),
        ConfigCommand::Validate(v) => execute_validate(&v.file, format),
        ConfigCommand::Path => execute_path(explicit, format),
    }
}

fn execute_show(config: &BtrustConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Table | OutputFormat::Minimal => {
            if format == OutputFormat::Table {
                print_header("Effective Configuration");
            }
            print!("{}", config.to_toml_string()?);
        }
        OutputFormat::Csv => {
            let est = &config.estimator;
            let platform = &config.platform;
            let rows = vec![
                KeyValue::new("estimator.base_rate", est.base_rate.to_string()),
                KeyValue::new("estimator.yield_floor", est.yield_floor.to_string()),
                KeyValue::new("estimator.yield_decimals", est.yield_decimals.to_string()),
                KeyValue::new("estimator.risk.low_min_ratio", est.risk.low_min_ratio.to_string()),
                KeyValue::new(
                    "estimator.risk.high_below_ratio",
                    est.risk.high_below_ratio.to_string(),
                ),
                KeyValue::new("platform.fee_bps", platform.fee_bps.value().to_string()),
                KeyValue::new(
                    "platform.min_collateral_ratio_bps",
                    platform.min_collateral_ratio_bps.value().to_string(),
                ),
                KeyValue::new(
                    "platform.liquidation_threshold_bps",
                    platform.liquidation_threshold_bps.value().to_string(),
                ),
                KeyValue::new(
                    "platform.liquidation_penalty_bps",
                    platform.liquidation_penalty_bps.value().to_string(),
                ),
                KeyValue::new(
                    "platform.max_coupon_rate_bps",
                    platform.max_coupon_rate_bps.value().to_string(),
                ),
            ];
            print_output(&rows, format)?;
        }
    }
    Ok(())
}

fn execute_validate(file: &Path, format: OutputFormat) -> Result<()> {
    match BtrustConfig::from_file(file) {
        Ok(_) => {
            match format {
                OutputFormat::Json => println!(r#"{{"valid": true}}"#),
                _ => print_success(&format!("{} is valid", file.display())),
            }
            Ok(())
        }
        Err(ConfigError::MultipleValidationErrors(errors)) => {
            for err in &errors {
                print_error(&err.to_string());
            }
            Err(CliError::Invalid {
                subject: file.display().to_string(),
                count: errors.len(),
            }
            .into())
        }
        Err(err) => {
            print_error(&err.to_string());
            Err(CliError::Config(err).into())
        }
    }
}

fn execute_path(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = explicit.map(Path::to_path_buf).or_else(default_config_path);

    let Some(path) = path else {
        print_warning("No configuration directory available; using defaults");
        return Ok(());
    };

    if format == OutputFormat::Minimal || format == OutputFormat::Json {
        println!("{}", path.display());
        return Ok(());
    }

    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    print_info(&format!("Override with --config or {CONFIG_ENV_VAR}"));
    Ok(())
}
