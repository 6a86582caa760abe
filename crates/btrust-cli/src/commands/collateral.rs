//! Collateral command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use btrust_config::BtrustConfig;
use btrust_issuance::{CollateralHealth, CollateralPolicy, LiquidationPayout};

use crate::cli::OutputFormat;
use crate::output::{print_report, KeyValue};

/// Arguments for the collateral command.
#[derive(Args, Debug)]
pub struct CollateralArgs {
    /// Face value per unit, in base units
    #[arg(long)]
    pub principal: u64,

    /// Units in circulation
    #[arg(long)]
    pub outstanding: u64,

    /// Collateral deposited, in base units
    #[arg(long)]
    pub deposited: u64,
}

#[derive(Debug, Serialize)]
struct CollateralReport {
    #[serde(flatten)]
    health: CollateralHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    liquidation: Option<LiquidationPayout>,
}

/// Execute the collateral command.
pub fn execute(args: &CollateralArgs, config: &BtrustConfig, format: OutputFormat) -> Result<()> {
    let policy = CollateralPolicy::from_config(&config.platform);
    let health = policy.health(args.principal, args.outstanding, args.deposited)?;
    let liquidation = if health.liquidatable {
        Some(policy.liquidate(&health)?)
    } else {
        None
    };

    let ratio = health
        .ratio_bps
        .map_or_else(|| "n/a".to_string(), |bps| format!("{bps} bps"));

    let mut rows = vec![
        KeyValue::new("Outstanding Value", health.outstanding_value.to_string()),
        KeyValue::new("Deposited", health.deposited.to_string()),
        KeyValue::new("Collateral Ratio", ratio),
        KeyValue::new("Liquidation Threshold", policy.liquidation_threshold_bps.to_string()),
        KeyValue::new("Required Collateral", health.required_collateral.to_string()),
        KeyValue::new("Liquidatable", if health.liquidatable { "yes" } else { "no" }),
    ];
    if let Some(payout) = &liquidation {
        rows.push(KeyValue::new("Penalty Withheld", payout.penalty.to_string()));
        rows.push(KeyValue::new("Liquidator Reward", payout.liquidator_reward.to_string()));
    }

    let minimal = health.liquidatable.to_string();
    let report = CollateralReport {
        health,
        liquidation,
    };
    print_report("Collateral Health", &rows, &report, &minimal, format)
}
