//! Yield estimator configuration.
//!
//! Every constant of the yield/risk formula lives here so that tier
//! boundaries can be audited and changed without touching the arithmetic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use btrust_core::types::{PerCollateral, Step, StepDirection, StepTable};
use btrust_core::validation::{Validate, ValidationError};

/// Lowest yield floor a configuration may set, percent.
pub const MIN_YIELD_FLOOR: Decimal = dec!(2.0);

// =============================================================================
// RISK THRESHOLDS
// =============================================================================

/// Collateral ratio cut-offs for the risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Minimum ratio (percent, inclusive) for a Low rating.
    pub low_min_ratio: Decimal,
    /// Ratios strictly below this (percent) are High.
    pub high_below_ratio: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_min_ratio: dec!(175),
            high_below_ratio: dec!(130),
        }
    }
}

// =============================================================================
// ESTIMATOR CONFIGURATION
// =============================================================================

/// Parameters of the issuance yield estimator.
///
/// The defaults reproduce the published issuance calculator:
///
/// | component | rule |
/// |---|---|
/// | base rate | 4.0% |
/// | duration premium | ≤1m 0.0, ≤3m 1.5, ≤6m 2.5, longer 4.0 |
/// | collateral adjustment | ≥200% −2.0, ≥150% −1.0, ≥120% 0.0, below +2.0 |
/// | credit spread | stablecoin 0.0, native 1.0, custom 3.0 |
/// | floor | 2.0% after rounding to 2 dp |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Base annual rate, percent.
    pub base_rate: Decimal,

    /// Lower bound for the estimated yield, percent.
    pub yield_floor: Decimal,

    /// Decimal places the yield is rounded to before flooring.
    pub yield_decimals: u32,

    /// Premium by term in months (`at_most` table).
    pub duration_premium: StepTable,

    /// Adjustment by collateral ratio percent (`at_least` table).
    pub collateral_adjustment: StepTable,

    /// Spread by collateral asset class, percent.
    pub credit_spread: PerCollateral<Decimal>,

    /// Valuation factor applied to the collateral amount before comparing it
    /// with the bond's face value. Native tokens are quoted per whole token
    /// while face value is in stablecoin units.
    pub unit_scale: PerCollateral<Decimal>,

    /// Risk rating cut-offs.
    pub risk: RiskThresholds,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_rate: dec!(4.0),
            yield_floor: dec!(2.0),
            yield_decimals: 2,
            duration_premium: default_duration_premium(),
            collateral_adjustment: default_collateral_adjustment(),
            credit_spread: PerCollateral::new(dec!(1.0), dec!(0.0), dec!(3.0)),
            unit_scale: PerCollateral::new(dec!(100), dec!(1), dec!(1)),
            risk: RiskThresholds::default(),
        }
    }
}

fn default_duration_premium() -> StepTable {
    StepTable::new(
        StepDirection::AtMost,
        vec![
            Step::new(dec!(1), dec!(0.0)),
            Step::new(dec!(3), dec!(1.5)),
            Step::new(dec!(6), dec!(2.5)),
        ],
        dec!(4.0),
    )
}

fn default_collateral_adjustment() -> StepTable {
    StepTable::new(
        StepDirection::AtLeast,
        vec![
            Step::new(dec!(200), dec!(-2.0)),
            Step::new(dec!(150), dec!(-1.0)),
            Step::new(dec!(120), dec!(0.0)),
        ],
        dec!(2.0),
    )
}

impl EstimatorConfig {
    /// Builder method to value every collateral type with the same scale.
    pub fn with_uniform_unit_scale(mut self, scale: Decimal) -> Self {
        self.unit_scale = PerCollateral::uniform(scale);
        self
    }

    /// Builder method to set the base rate.
    pub fn with_base_rate(mut self, base_rate: Decimal) -> Self {
        self.base_rate = base_rate;
        self
    }

    /// Builder method to set the yield floor.
    pub fn with_yield_floor(mut self, floor: Decimal) -> Self {
        self.yield_floor = floor;
        self
    }
}

impl Validate for EstimatorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.base_rate.is_sign_negative() {
            errors.push(ValidationError::with_rule(
                "estimator.base_rate",
                "Base rate cannot be negative",
                "non_negative",
            ));
        }

        if self.yield_floor < MIN_YIELD_FLOOR {
            errors.push(ValidationError::with_rule(
                "estimator.yield_floor",
                format!("Yield floor {} is below the minimum of {MIN_YIELD_FLOOR}", self.yield_floor),
                "min_floor",
            ));
        }

        if self.yield_decimals > 10 {
            errors.push(ValidationError::with_rule(
                "estimator.yield_decimals",
                format!("Yield precision {} exceeds maximum of 10", self.yield_decimals),
                "max_precision",
            ));
        }

        if self.duration_premium.direction() != StepDirection::AtMost {
            errors.push(ValidationError::with_rule(
                "estimator.duration_premium.direction",
                "Duration premium must be an at_most table",
                "table_direction",
            ));
        }
        for err in self.duration_premium.validate() {
            errors.push(ValidationError::new(
                format!("estimator.duration_premium.{}", err.field),
                err.message,
            ));
        }

        if self.collateral_adjustment.direction() != StepDirection::AtLeast {
            errors.push(ValidationError::with_rule(
                "estimator.collateral_adjustment.direction",
                "Collateral adjustment must be an at_least table",
                "table_direction",
            ));
        }
        if !self.collateral_adjustment.is_non_increasing() {
            errors.push(ValidationError::with_rule(
                "estimator.collateral_adjustment",
                "More collateral must never raise the adjustment",
                "non_increasing",
            ));
        }
        for err in self.collateral_adjustment.validate() {
            errors.push(ValidationError::new(
                format!("estimator.collateral_adjustment.{}", err.field),
                err.message,
            ));
        }

        for (collateral, scale) in self.unit_scale.iter() {
            if *scale <= Decimal::ZERO {
                errors.push(ValidationError::with_rule(
                    format!("estimator.unit_scale.{collateral}"),
                    "Unit scale must be positive",
                    "positive",
                ));
            }
        }

        if self.risk.high_below_ratio > self.risk.low_min_ratio {
            errors.push(ValidationError::with_rule(
                "estimator.risk",
                format!(
                    "High-risk cut-off {} exceeds low-risk minimum {}",
                    self.risk.high_below_ratio, self.risk.low_min_ratio
                ),
                "ordered_thresholds",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btrust_core::types::CollateralType;

    #[test]
    fn test_defaults_are_valid() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_empty(), "{:?}", config.validate());
    }

    #[test]
    fn test_default_tables() {
        let config = EstimatorConfig::default();
        assert_eq!(config.duration_premium.lookup(dec!(3)), dec!(1.5));
        assert_eq!(config.duration_premium.lookup(dec!(12)), dec!(4));
        assert_eq!(config.collateral_adjustment.lookup(dec!(150)), dec!(-1));
        assert_eq!(config.collateral_adjustment.lookup(dec!(100)), dec!(2));
    }

    #[test]
    fn test_default_schedules() {
        let config = EstimatorConfig::default();
        assert_eq!(*config.credit_spread.get(CollateralType::Custom), dec!(3));
        assert_eq!(*config.unit_scale.get(CollateralType::Native), dec!(100));
        assert_eq!(*config.unit_scale.get(CollateralType::Stablecoin), dec!(1));
    }

    #[test]
    fn test_uniform_unit_scale() {
        let config = EstimatorConfig::default().with_uniform_unit_scale(dec!(100));
        assert!(config.unit_scale.iter().all(|(_, s)| *s == dec!(100)));
    }

    #[test]
    fn test_rejects_increasing_collateral_adjustment() {
        let mut config = EstimatorConfig::default();
        config.collateral_adjustment = StepTable::new(
            StepDirection::AtLeast,
            vec![Step::new(dec!(200), dec!(3))],
            dec!(0),
        );
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.rule.as_deref() == Some("non_increasing")));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = EstimatorConfig::default()
            .with_base_rate(dec!(-1))
            .with_yield_floor(dec!(-0.5));
        config.unit_scale.custom = Decimal::ZERO;
        config.risk.high_below_ratio = dec!(200);
        config.yield_decimals = 11;

        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"estimator.base_rate".to_string()));
        assert!(fields.contains(&"estimator.yield_floor".to_string()));
        assert!(fields.contains(&"estimator.unit_scale.custom".to_string()));
        assert!(fields.contains(&"estimator.risk".to_string()));
        assert!(fields.contains(&"estimator.yield_decimals".to_string()));
    }

    #[test]
    fn test_floor_cannot_drop_below_minimum() {
        for floor in [dec!(0), dec!(1.99)] {
            let errors = EstimatorConfig::default().with_yield_floor(floor).validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "estimator.yield_floor");
            assert_eq!(errors[0].rule.as_deref(), Some("min_floor"));
        }

        let raised = EstimatorConfig::default().with_yield_floor(dec!(3));
        assert!(raised.validate().is_empty());
        assert!(EstimatorConfig::default()
            .with_yield_floor(MIN_YIELD_FLOOR)
            .validate()
            .is_empty());
    }

    #[test]
    fn test_rejects_wrong_direction() {
        let mut config = EstimatorConfig::default();
        config.duration_premium =
            StepTable::new(StepDirection::AtLeast, vec![], dec!(0));
        assert!(config
            .validate()
            .iter()
            .any(|e| e.field == "estimator.duration_premium.direction"));
    }
}
