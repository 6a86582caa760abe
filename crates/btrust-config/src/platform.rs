//! Platform economics configuration.

use serde::{Deserialize, Serialize};

use btrust_core::types::{BasisPoints, BPS_DENOMINATOR};
use btrust_core::validation::{Validate, ValidationError};

/// Fee and collateral parameters of the bond platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Fee charged on primary purchases and secondary fills.
    pub fee_bps: BasisPoints,

    /// Minimum collateral ratio a new bond is created with.
    pub min_collateral_ratio_bps: BasisPoints,

    /// Ratio below which a bond can be liquidated.
    pub liquidation_threshold_bps: BasisPoints,

    /// Share of seized collateral withheld from the liquidator.
    pub liquidation_penalty_bps: BasisPoints,

    /// Highest coupon rate accepted at issuance.
    pub max_coupon_rate_bps: BasisPoints,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            fee_bps: BasisPoints::new(50),
            min_collateral_ratio_bps: BasisPoints::new(15_000),
            liquidation_threshold_bps: BasisPoints::new(12_000),
            liquidation_penalty_bps: BasisPoints::new(1_000),
            max_coupon_rate_bps: BasisPoints::new(BPS_DENOMINATOR),
        }
    }
}

impl PlatformConfig {
    /// Builder method to set the platform fee.
    pub fn with_fee_bps(mut self, bps: u64) -> Self {
        self.fee_bps = BasisPoints::new(bps);
        self
    }
}

impl Validate for PlatformConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.fee_bps > BasisPoints::ONE_HUNDRED_PERCENT {
            errors.push(ValidationError::with_rule(
                "platform.fee_bps",
                format!("Fee {} exceeds 100%", self.fee_bps),
                "max_bps",
            ));
        }

        if self.liquidation_penalty_bps > BasisPoints::ONE_HUNDRED_PERCENT {
            errors.push(ValidationError::with_rule(
                "platform.liquidation_penalty_bps",
                format!("Penalty {} exceeds 100%", self.liquidation_penalty_bps),
                "max_bps",
            ));
        }

        if self.liquidation_threshold_bps > self.min_collateral_ratio_bps {
            errors.push(ValidationError::with_rule(
                "platform.liquidation_threshold_bps",
                format!(
                    "Liquidation threshold {} is above the minimum collateral ratio {}",
                    self.liquidation_threshold_bps, self.min_collateral_ratio_bps
                ),
                "ordered_thresholds",
            ));
        }

        if self.max_coupon_rate_bps.value() == 0 {
            errors.push(ValidationError::with_rule(
                "platform.max_coupon_rate_bps",
                "Maximum coupon rate must be positive",
                "positive",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlatformConfig::default();
        assert_eq!(config.fee_bps.value(), 50);
        assert_eq!(config.min_collateral_ratio_bps.value(), 15_000);
        assert_eq!(config.liquidation_threshold_bps.value(), 12_000);
        assert_eq!(config.liquidation_penalty_bps.value(), 1_000);
        assert!(config.is_valid());
    }

    #[test]
    fn test_fee_over_100_percent() {
        let config = PlatformConfig::default().with_fee_bps(10_001);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "platform.fee_bps");
    }

    #[test]
    fn test_threshold_above_minimum_ratio() {
        let config = PlatformConfig {
            liquidation_threshold_bps: BasisPoints::new(16_000),
            ..PlatformConfig::default()
        };
        assert!(!config.is_valid());
    }
}
