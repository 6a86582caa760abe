//! Risk rating.

use rust_decimal::Decimal;

use btrust_config::RiskThresholds;
use btrust_core::types::{CollateralType, RiskRating};

/// Rates an issue from its collateral ratio and collateral type.
///
/// Custom collateral is always [`RiskRating::High`], whatever the ratio.
pub fn rate_risk(
    collateral_ratio: Decimal,
    collateral_type: CollateralType,
    thresholds: &RiskThresholds,
) -> RiskRating {
    if collateral_type == CollateralType::Custom || collateral_ratio < thresholds.high_below_ratio {
        RiskRating::High
    } else if collateral_ratio >= thresholds.low_min_ratio {
        RiskRating::Low
    } else {
        RiskRating::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rate(ratio: Decimal, collateral: CollateralType) -> RiskRating {
        rate_risk(ratio, collateral, &RiskThresholds::default())
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(rate(dec!(129.99), CollateralType::Native), RiskRating::High);
        assert_eq!(rate(dec!(130), CollateralType::Native), RiskRating::Medium);
        assert_eq!(rate(dec!(174.99), CollateralType::Stablecoin), RiskRating::Medium);
        assert_eq!(rate(dec!(175), CollateralType::Stablecoin), RiskRating::Low);
    }

    #[test]
    fn test_custom_always_high() {
        for ratio in [dec!(0), dec!(150), dec!(175), dec!(10000)] {
            assert_eq!(rate(ratio, CollateralType::Custom), RiskRating::High);
        }
    }

    #[test]
    fn test_zero_ratio_is_high() {
        assert_eq!(rate(Decimal::ZERO, CollateralType::Stablecoin), RiskRating::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RiskThresholds {
            low_min_ratio: dec!(300),
            high_below_ratio: dec!(100),
        };
        assert_eq!(
            rate_risk(dec!(200), CollateralType::Native, &thresholds),
            RiskRating::Medium
        );
        assert_eq!(
            rate_risk(dec!(99), CollateralType::Native, &thresholds),
            RiskRating::High
        );
    }
}
