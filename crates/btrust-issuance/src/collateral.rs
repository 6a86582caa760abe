//! Collateral health and liquidation.
//!
//! Collateral is valued one-to-one against face value in base units. A bond
//! whose deposited collateral falls below the liquidation threshold of its
//! outstanding face value can be liquidated; the liquidator receives the
//! collateral minus a penalty.

use serde::{Deserialize, Serialize};
use tracing::info;

use btrust_config::PlatformConfig;
use btrust_core::error::{BtrustError, BtrustResult};
use btrust_core::types::{BasisPoints, BPS_DENOMINATOR};

/// Collateral rules of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralPolicy {
    /// Floor for the ratio a bond is created with.
    pub min_ratio_bps: BasisPoints,
    /// Ratio below which a bond can be liquidated.
    pub liquidation_threshold_bps: BasisPoints,
    /// Share of seized collateral withheld from the liquidator.
    pub liquidation_penalty_bps: BasisPoints,
}

/// Collateral coverage of a bond at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralHealth {
    /// Face value of the units in circulation.
    pub outstanding_value: u64,
    /// Collateral needed to stay above the liquidation threshold.
    pub required_collateral: u64,
    /// Collateral deposited.
    pub deposited: u64,
    /// `deposited / outstanding_value` in bps; `None` with nothing outstanding.
    pub ratio_bps: Option<u64>,
    /// Returns true if the bond can be liquidated.
    pub liquidatable: bool,
}

/// Distribution of liquidated collateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationPayout {
    /// Collateral seized.
    pub seized: u64,
    /// Penalty withheld.
    pub penalty: u64,
    /// Paid to the liquidator.
    pub liquidator_reward: u64,
}

impl Default for CollateralPolicy {
    fn default() -> Self {
        Self::from_config(&PlatformConfig::default())
    }
}

impl CollateralPolicy {
    /// Policy taken from the platform configuration.
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            min_ratio_bps: config.min_collateral_ratio_bps,
            liquidation_threshold_bps: config.liquidation_threshold_bps,
            liquidation_penalty_bps: config.liquidation_penalty_bps,
        }
    }

    /// The ratio a bond is actually created with: the request, raised to the
    /// platform minimum.
    pub fn effective_ratio_bps(&self, requested: BasisPoints) -> BasisPoints {
        requested.max(self.min_ratio_bps)
    }

    /// Assesses coverage of `outstanding_supply` units of face value
    /// `principal` by `deposited` collateral.
    pub fn health(
        &self,
        principal: u64,
        outstanding_supply: u64,
        deposited: u64,
    ) -> BtrustResult<CollateralHealth> {
        let outstanding_value = outstanding_supply
            .checked_mul(principal)
            .ok_or_else(|| BtrustError::overflow("outstanding value"))?;
        let required_collateral = self
            .liquidation_threshold_bps
            .apply(outstanding_value)
            .ok_or_else(|| BtrustError::overflow("required collateral"))?;

        let ratio_bps = if outstanding_value == 0 {
            None
        } else {
            let ratio = u128::from(deposited) * u128::from(BPS_DENOMINATOR)
                / u128::from(outstanding_value);
            Some(u64::try_from(ratio).unwrap_or(u64::MAX))
        };

        Ok(CollateralHealth {
            outstanding_value,
            required_collateral,
            deposited,
            ratio_bps,
            liquidatable: deposited > 0 && deposited < required_collateral,
        })
    }

    /// Liquidates the collateral described by `health`.
    ///
    /// # Errors
    ///
    /// `NoCollateral` if nothing is deposited, `NotLiquidatable` if the
    /// collateral still meets the threshold.
    pub fn liquidate(&self, health: &CollateralHealth) -> BtrustResult<LiquidationPayout> {
        if health.deposited == 0 {
            return Err(BtrustError::NoCollateral);
        }
        if !health.liquidatable {
            return Err(BtrustError::NotLiquidatable {
                deposited: health.deposited,
                required: health.required_collateral,
            });
        }

        let penalty = self
            .liquidation_penalty_bps
            .apply(health.deposited)
            .ok_or_else(|| BtrustError::overflow("liquidation penalty"))?;

        info!(
            seized = health.deposited,
            penalty,
            required = health.required_collateral,
            "collateral liquidated"
        );

        Ok(LiquidationPayout {
            seized: health.deposited,
            penalty,
            liquidator_reward: health.deposited - penalty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_ratio() {
        let policy = CollateralPolicy::default();
        assert_eq!(
            policy.effective_ratio_bps(BasisPoints::new(10_000)),
            BasisPoints::new(15_000)
        );
        assert_eq!(
            policy.effective_ratio_bps(BasisPoints::new(20_000)),
            BasisPoints::new(20_000)
        );
    }

    #[test]
    fn test_health_boundary() {
        let policy = CollateralPolicy::default();
        // 100 units × 1000 = 100_000 outstanding; 120% = 120_000 required
        let at_threshold = policy.health(1_000, 100, 120_000).unwrap();
        assert_eq!(at_threshold.required_collateral, 120_000);
        assert_eq!(at_threshold.ratio_bps, Some(12_000));
        assert!(!at_threshold.liquidatable);

        let below = policy.health(1_000, 100, 119_999).unwrap();
        assert!(below.liquidatable);
    }

    #[test]
    fn test_nothing_outstanding() {
        let health = CollateralPolicy::default().health(1_000, 0, 50).unwrap();
        assert_eq!(health.ratio_bps, None);
        assert!(!health.liquidatable);
    }

    #[test]
    fn test_liquidation_payout() {
        let policy = CollateralPolicy::default();
        let health = policy.health(1_000, 100, 110_000).unwrap();
        let payout = policy.liquidate(&health).unwrap();
        assert_eq!(payout.seized, 110_000);
        assert_eq!(payout.penalty, 11_000);
        assert_eq!(payout.liquidator_reward, 99_000);
    }

    #[test]
    fn test_liquidation_rejections() {
        let policy = CollateralPolicy::default();

        let empty = policy.health(1_000, 100, 0).unwrap();
        assert_eq!(policy.liquidate(&empty), Err(BtrustError::NoCollateral));

        let healthy = policy.health(1_000, 100, 150_000).unwrap();
        assert_eq!(
            policy.liquidate(&healthy),
            Err(BtrustError::NotLiquidatable {
                deposited: 150_000,
                required: 120_000
            })
        );
    }

    #[test]
    fn test_from_config() {
        let config = PlatformConfig {
            liquidation_threshold_bps: BasisPoints::new(11_000),
            ..PlatformConfig::default()
        };
        let policy = CollateralPolicy::from_config(&config);
        let health = policy.health(1_000, 100, 115_000).unwrap();
        assert!(!health.liquidatable);
    }
}
