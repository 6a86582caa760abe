//! Platform fees on purchases and secondary fills.

use serde::{Deserialize, Serialize};

use btrust_config::PlatformConfig;
use btrust_core::error::{BtrustError, BtrustResult};
use btrust_core::types::BasisPoints;

/// How a payment divides between the platform and the seller or issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSplit {
    /// Amount paid by the buyer.
    pub gross: u64,
    /// Platform fee, rounded down.
    pub fee: u64,
    /// Amount received by the seller or issuer.
    pub net: u64,
}

/// Fee rate charged by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Fee rate.
    pub fee_bps: BasisPoints,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::from_config(&PlatformConfig::default())
    }
}

impl FeeSchedule {
    /// Creates a schedule charging `fee_bps`.
    pub fn new(fee_bps: BasisPoints) -> Self {
        Self { fee_bps }
    }

    /// Schedule taken from the platform configuration.
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::new(config.fee_bps)
    }

    /// Fee on a gross amount.
    pub fn fee_on(&self, gross: u64) -> BtrustResult<u64> {
        self.fee_bps
            .apply(gross)
            .ok_or_else(|| BtrustError::overflow("fee calculation"))
    }

    /// Splits the payment for `quantity` units at `price_per_unit`.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if price or quantity is zero, `MathOverflow` if the
    /// gross amount does not fit.
    pub fn split(&self, price_per_unit: u64, quantity: u64) -> BtrustResult<PaymentSplit> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        if price_per_unit == 0 {
            return Err(BtrustError::invalid_amount("price must be positive"));
        }

        let gross = price_per_unit
            .checked_mul(quantity)
            .ok_or_else(|| BtrustError::overflow("payment calculation"))?;
        let fee = self.fee_on(gross)?;

        Ok(PaymentSplit {
            gross,
            fee,
            net: gross - fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_is_half_percent() {
        let split = FeeSchedule::default().split(1_000, 1_000).unwrap();
        assert_eq!(split.gross, 1_000_000);
        assert_eq!(split.fee, 5_000);
        assert_eq!(split.net, 995_000);
    }

    #[test]
    fn test_fee_rounds_down() {
        let split = FeeSchedule::default().split(199, 1).unwrap();
        assert_eq!(split.fee, 0);
        assert_eq!(split.net, 199);

        let split = FeeSchedule::default().split(201, 1).unwrap();
        assert_eq!(split.fee, 1);
        assert_eq!(split.net, 200);
    }

    #[test]
    fn test_zero_inputs_rejected() {
        let fees = FeeSchedule::default();
        assert!(matches!(
            fees.split(100, 0),
            Err(BtrustError::InvalidAmount { .. })
        ));
        assert!(matches!(
            fees.split(0, 10),
            Err(BtrustError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_overflow() {
        let fees = FeeSchedule::default();
        assert!(matches!(
            fees.split(u64::MAX, 2),
            Err(BtrustError::MathOverflow { .. })
        ));
        // gross fits, but gross * bps does not
        assert!(matches!(
            fees.split(u64::MAX, 1),
            Err(BtrustError::MathOverflow { .. })
        ));
    }

    #[test]
    fn test_zero_fee_schedule() {
        let split = FeeSchedule::new(BasisPoints::new(0)).split(10, 10).unwrap();
        assert_eq!(split.fee, 0);
        assert_eq!(split.net, 100);
    }

    #[test]
    fn test_split_invariant() {
        let fees = FeeSchedule::new(BasisPoints::new(137));
        for qty in 1..200u64 {
            let split = fees.split(997, qty).unwrap();
            assert_eq!(split.fee + split.net, split.gross);
        }
    }
}
