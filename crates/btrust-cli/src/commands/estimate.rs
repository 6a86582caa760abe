//! Estimate command implementation.
//!
//! Runs the issuance yield estimator on a request as typed. Incomplete or
//! malformed fields are tolerated and read as zero.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use btrust_config::BtrustConfig;
use btrust_issuance::{IssuanceForm, YieldBreakdown, YieldEstimate, YieldEstimator};

use crate::cli::OutputFormat;
use crate::commands::IssuanceArgs;
use crate::output::{format_risk, print_report, print_warning, KeyValue};

/// Arguments for the estimate command.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub issuance: IssuanceArgs,
}

/// Estimate with its yield components, as emitted in JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport {
    #[serde(flatten)]
    estimate: YieldEstimate,
    breakdown: YieldBreakdown,
}

/// Execute the estimate command.
pub fn execute(
    args: &EstimateArgs,
    config: &BtrustConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let form = args.issuance.to_form()?;
    if !quiet && format == OutputFormat::Table {
        warn_malformed(&form);
    }

    let estimator = YieldEstimator::new(config.estimator.clone());
    let terms = form.terms();
    let estimate = estimator.estimate(&terms);
    let breakdown = estimator.breakdown(&terms, estimate.collateral_ratio_percent);

    let risk = if format == OutputFormat::Table {
        format_risk(estimate.risk_rating)
    } else {
        estimate.risk_rating.to_string()
    };

    let rows = vec![
        KeyValue::new("Principal", terms.principal.to_string()),
        KeyValue::new("Total Supply", terms.total_supply.to_string()),
        KeyValue::new("Duration (months)", terms.duration_months.to_string()),
        KeyValue::new("Collateral", terms.collateral_amount.to_string()),
        KeyValue::new("Collateral Type", terms.collateral_type.label()),
        KeyValue::from_percent("Collateral Ratio", estimate.collateral_ratio_percent),
        KeyValue::from_percent("Base Rate", breakdown.base_rate),
        KeyValue::from_points("Duration Premium", breakdown.duration_premium),
        KeyValue::from_points("Collateral Adjustment", breakdown.collateral_adjustment),
        KeyValue::from_points("Credit Spread", breakdown.credit_spread),
        KeyValue::from_percent("Estimated Yield", estimate.estimated_yield_percent),
        KeyValue::new("Risk Rating", risk),
    ];

    let report = EstimateReport {
        estimate,
        breakdown,
    };
    print_report(
        "Issuance Yield Estimate",
        &rows,
        &report,
        &format!("{:.2}", estimate.estimated_yield_percent),
        format,
    )
}

fn warn_malformed(form: &IssuanceForm) {
    let fields = [
        ("principal", &form.principal),
        ("supply", &form.total_supply),
        ("duration", &form.duration_months),
        ("collateral", &form.collateral_amount),
    ];
    for (name, input) in fields {
        if input.is_malformed() {
            print_warning(&format!("{name} is not a number; treating it as 0"));
        }
    }
}
