//! BTrust CLI - Command-line interface for bond issuance analytics.
//!
//! # Usage
//!
//! ```bash
//! # Estimate yield and risk for an issuance request
//! btrust estimate --principal 1000 --supply 10000 --duration 12 --collateral 500000 -t native
//!
//! # Strictly validate a request read from JSON
//! btrust validate --input request.json
//!
//! # Split a payment into fee and proceeds
//! btrust fee --price 1000 --quantity 25
//!
//! # Check collateral health
//! btrust collateral --principal 1000 --outstanding 100 --deposited 110000
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "btrust_issuance=debug,btrust_config=debug,btrust=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let format = cli.format;
    let explicit = cli.config.as_deref();
    let config = commands::load_config(explicit)?;

    match &cli.command {
        Commands::Estimate(args) => commands::estimate::execute(args, &config, format, cli.quiet)?,
        Commands::Validate(args) => commands::validate::execute(args, format, cli.quiet)?,
        Commands::Fee(args) => commands::fee::execute(args, &config, format)?,
        Commands::Accrual(args) => commands::accrual::execute(args, format)?,
        Commands::Collateral(args) => commands::collateral::execute(args, &config, format)?,
        Commands::Config(args) => commands::config::execute(args, &config, explicit, format)?,
    }

    Ok(())
}
