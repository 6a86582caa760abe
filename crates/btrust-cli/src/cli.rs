//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    AccrualArgs, CollateralArgs, ConfigArgs, EstimateArgs, FeeArgs, ValidateArgs,
};

/// BTrust - Bond issuance analytics CLI
#[derive(Parser)]
#[command(name = "btrust")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML or JSON)
    #[arg(long, global = true, env = "BTRUST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate collateral ratio, yield and risk for an issuance request
    Estimate(EstimateArgs),

    /// Check an issuance request strictly before deployment
    Validate(ValidateArgs),

    /// Split a payment into platform fee and net proceeds
    Fee(FeeArgs),

    /// Compute coupon accrued on a holder position
    Accrual(AccrualArgs),

    /// Assess collateral health and liquidation payout
    Collateral(CollateralArgs),

    /// Inspect and check configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["btrust", "fee", "--price", "10", "--quantity", "2", "-f", "json"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Fee(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["btrust", "-v", "-q", "config", "path"]).is_err());
    }
}
