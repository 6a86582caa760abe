//! Fee command implementation.

use anyhow::Result;
use clap::Args;

use btrust_config::BtrustConfig;
use btrust_core::types::BasisPoints;
use btrust_issuance::FeeSchedule;

use crate::cli::OutputFormat;
use crate::output::{print_report, KeyValue};

/// Arguments for the fee command.
#[derive(Args, Debug)]
pub struct FeeArgs {
    /// Price per unit, in base units
    #[arg(long)]
    pub price: u64,

    /// Number of units
    #[arg(long)]
    pub quantity: u64,

    /// Fee rate in basis points (default: from configuration)
    #[arg(long)]
    pub fee_bps: Option<u64>,
}

/// Execute the fee command.
pub fn execute(args: &FeeArgs, config: &BtrustConfig, format: OutputFormat) -> Result<()> {
    let schedule = args
        .fee_bps
        .map_or_else(|| FeeSchedule::from_config(&config.platform), |bps| {
            FeeSchedule::new(BasisPoints::new(bps))
        });
    let split = schedule.split(args.price, args.quantity)?;

    let rows = vec![
        KeyValue::new("Price per Unit", args.price.to_string()),
        KeyValue::new("Quantity", args.quantity.to_string()),
        KeyValue::new("Fee Rate", schedule.fee_bps.to_string()),
        KeyValue::new("Gross", split.gross.to_string()),
        KeyValue::new("Platform Fee", split.fee.to_string()),
        KeyValue::new("Net to Seller", split.net.to_string()),
    ];

    print_report("Payment Split", &rows, &split, &split.fee.to_string(), format)
}
