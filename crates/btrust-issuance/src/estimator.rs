//! Issuance yield estimator.
//!
//! Computes an indicative collateral ratio, annual yield and risk rating for
//! a bond issuance request. The estimator is total: any form, however
//! incomplete, produces an estimate.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use btrust_config::EstimatorConfig;
use btrust_core::types::RiskRating;

use crate::form::{IssuanceForm, IssuanceTerms};
use crate::risk::rate_risk;

/// The estimator's answer for one issuance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldEstimate {
    /// Collateral value as a percentage of face value.
    pub collateral_ratio_percent: Decimal,
    /// Indicative annual yield, percent, never below the floor.
    pub estimated_yield_percent: Decimal,
    /// Risk rating.
    pub risk_rating: RiskRating,
}

/// The additive components of the yield before rounding and flooring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldBreakdown {
    /// Base annual rate.
    pub base_rate: Decimal,
    /// Premium for the term.
    pub duration_premium: Decimal,
    /// Adjustment for collateral coverage (negative for strong coverage).
    pub collateral_adjustment: Decimal,
    /// Spread for the collateral asset class.
    pub credit_spread: Decimal,
    /// Sum of the components.
    pub total: Decimal,
}

/// Yield estimator over a fixed configuration.
///
/// # Example
///
/// ```rust
/// use btrust_issuance::{IssuanceForm, YieldEstimator};
/// use btrust_core::types::{CollateralType, RiskRating};
/// use rust_decimal_macros::dec;
///
/// let form = IssuanceForm::new()
///     .with_principal("1000")
///     .with_total_supply("10000")
///     .with_duration_months("12")
///     .with_collateral_amount("500000")
///     .with_collateral_type(CollateralType::Native);
///
/// let estimate = YieldEstimator::default().estimate_form(&form);
/// assert_eq!(estimate.collateral_ratio_percent, dec!(500));
/// assert_eq!(estimate.estimated_yield_percent, dec!(7.00));
/// assert_eq!(estimate.risk_rating, RiskRating::Low);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YieldEstimator {
    config: EstimatorConfig,
}

impl YieldEstimator {
    /// Creates an estimator with the given configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Collateral value as a percentage of total face value.
    ///
    /// Zero when the face value is zero or the arithmetic does not fit.
    pub fn collateral_ratio(&self, terms: &IssuanceTerms) -> Decimal {
        let scale = *self.config.unit_scale.get(terms.collateral_type);
        let ratio = terms.face_value().and_then(|face| {
            if face.is_zero() {
                return Some(Decimal::ZERO);
            }
            terms
                .collateral_amount
                .checked_mul(scale)?
                .checked_mul(dec!(100))?
                .checked_div(face)
        });

        match ratio {
            Some(r) => r.normalize(),
            None => {
                warn!(
                    principal = %terms.principal,
                    total_supply = terms.total_supply,
                    collateral = %terms.collateral_amount,
                    "collateral ratio out of range, reporting 0"
                );
                Decimal::ZERO
            }
        }
    }

    /// Yield components for the given terms and collateral ratio.
    pub fn breakdown(&self, terms: &IssuanceTerms, collateral_ratio: Decimal) -> YieldBreakdown {
        let base_rate = self.config.base_rate;
        let duration_premium = self
            .config
            .duration_premium
            .lookup(Decimal::from(terms.duration_months));
        let collateral_adjustment = self.config.collateral_adjustment.lookup(collateral_ratio);
        let credit_spread = *self.config.credit_spread.get(terms.collateral_type);

        YieldBreakdown {
            base_rate,
            duration_premium,
            collateral_adjustment,
            credit_spread,
            total: base_rate + duration_premium + collateral_adjustment + credit_spread,
        }
    }

    /// Estimates yield and risk for normalised terms.
    pub fn estimate(&self, terms: &IssuanceTerms) -> YieldEstimate {
        let collateral_ratio_percent = self.collateral_ratio(terms);
        let breakdown = self.breakdown(terms, collateral_ratio_percent);
        let estimated_yield_percent = self.finalize_yield(breakdown.total);
        let risk_rating = rate_risk(
            collateral_ratio_percent,
            terms.collateral_type,
            &self.config.risk,
        );

        debug!(
            ratio = %collateral_ratio_percent,
            yield_percent = %estimated_yield_percent,
            risk = %risk_rating,
            "estimated issuance yield"
        );

        YieldEstimate {
            collateral_ratio_percent,
            estimated_yield_percent,
            risk_rating,
        }
    }

    /// Estimates yield and risk for a raw form.
    pub fn estimate_form(&self, form: &IssuanceForm) -> YieldEstimate {
        self.estimate(&form.terms())
    }

    fn finalize_yield(&self, total: Decimal) -> Decimal {
        let rounded = total.round_dp_with_strategy(
            self.config.yield_decimals,
            RoundingStrategy::MidpointAwayFromZero,
        );
        rounded.max(self.config.yield_floor)
    }
}

/// Estimates a form with the default configuration.
pub fn estimate(form: &IssuanceForm) -> YieldEstimate {
    YieldEstimator::default().estimate_form(form)
}
