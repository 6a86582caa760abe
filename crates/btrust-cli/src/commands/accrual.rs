//! Accrual command implementation.
//!
//! Computes coupon accrued on a holder position and, given a vault balance,
//! what a claim would pay.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use serde::Serialize;

use btrust_core::types::BasisPoints;
use btrust_issuance::accrual;
use btrust_issuance::HolderPosition;

use crate::cli::OutputFormat;
use crate::commands::parse_timestamp;
use crate::output::{print_report, KeyValue};

/// Arguments for the accrual command.
#[derive(Args, Debug)]
pub struct AccrualArgs {
    /// Units held
    #[arg(long)]
    pub quantity: u64,

    /// Average purchase price per unit, in base units
    #[arg(long)]
    pub price: u64,

    /// Annual coupon rate in basis points
    #[arg(long)]
    pub coupon_bps: u64,

    /// Purchase time (RFC 3339)
    #[arg(long)]
    pub since: String,

    /// Valuation time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Coupon already claimed
    #[arg(long, default_value = "0")]
    pub claimed: u64,

    /// Yield vault balance; when given, the claim is simulated
    #[arg(long)]
    pub vault: Option<u64>,
}

#[derive(Debug, Serialize)]
struct AccrualReport {
    accrued: u64,
    owed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    paid: Option<u64>,
}

/// Execute the accrual command.
pub fn execute(args: &AccrualArgs, format: OutputFormat) -> Result<()> {
    let since = parse_timestamp(&args.since)?;
    let as_of = match &args.as_of {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now(),
    };
    let coupon = BasisPoints::new(args.coupon_bps);

    let mut position = HolderPosition::open(args.quantity, args.price, since)?;
    position.total_yield_claimed = args.claimed;

    let report = match args.vault {
        Some(vault) => {
            let claim = accrual::claim(&mut position, coupon, as_of, vault)?;
            AccrualReport {
                accrued: claim.accrued,
                owed: claim.owed,
                paid: Some(claim.paid),
            }
        }
        None => {
            let accrued = accrual::accrued(&position, coupon, as_of)?;
            AccrualReport {
                accrued,
                owed: accrued.saturating_sub(args.claimed),
                paid: None,
            }
        }
    };

    let mut rows = vec![
        KeyValue::new("Quantity", args.quantity.to_string()),
        KeyValue::new("Purchase Price", args.price.to_string()),
        KeyValue::new("Coupon", coupon.to_string()),
        KeyValue::new("Held Since", since.to_rfc3339()),
        KeyValue::new("As Of", as_of.to_rfc3339()),
        KeyValue::new("Accrued", report.accrued.to_string()),
        KeyValue::new("Already Claimed", args.claimed.to_string()),
        KeyValue::new("Owed", report.owed.to_string()),
    ];
    if let Some(paid) = report.paid {
        rows.push(KeyValue::new("Paid Now", paid.to_string()));
    }

    let minimal = report.paid.unwrap_or(report.owed).to_string();
    print_report("Coupon Accrual", &rows, &report, &minimal, format)
}
