//! Secondary market sell orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use btrust_core::error::{BtrustError, BtrustResult};

use crate::bond::Offering;
use crate::fees::{FeeSchedule, PaymentSplit};

/// Units of a bond offered for resale at a fixed price.
///
/// The offered units are held in escrow until filled or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrder {
    /// Units still on offer.
    pub quantity: u64,
    /// Asking price per unit.
    pub price_per_unit: u64,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// False once filled or cancelled.
    pub is_active: bool,
}

impl SellOrder {
    /// Places an order against an active bond.
    pub fn create(
        bond: &Offering,
        quantity: u64,
        price_per_unit: u64,
        now: DateTime<Utc>,
    ) -> BtrustResult<Self> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        if price_per_unit == 0 {
            return Err(BtrustError::invalid_amount("price must be positive"));
        }
        if !bond.is_active() {
            return Err(BtrustError::BondNotActive);
        }
        Ok(Self {
            quantity,
            price_per_unit,
            created_at: now,
            is_active: true,
        })
    }

    /// Buys `quantity` units off the order.
    ///
    /// # Errors
    ///
    /// `OrderNotActive` for a closed order, `ExceedsOrderQuantity` when asking
    /// for more than is left.
    pub fn fill(&mut self, quantity: u64, fees: &FeeSchedule) -> BtrustResult<PaymentSplit> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        if !self.is_active {
            return Err(BtrustError::OrderNotActive);
        }
        if quantity > self.quantity {
            return Err(BtrustError::ExceedsOrderQuantity {
                requested: quantity,
                available: self.quantity,
            });
        }

        let payment = fees.split(self.price_per_unit, quantity)?;
        self.quantity -= quantity;
        if self.quantity == 0 {
            self.is_active = false;
        }
        Ok(payment)
    }

    /// Withdraws the order. Returns the units released from escrow.
    pub fn cancel(&mut self) -> BtrustResult<u64> {
        if !self.is_active {
            return Err(BtrustError::OrderNotActive);
        }
        self.is_active = false;
        Ok(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondTerms;
    use btrust_config::PlatformConfig;
    use btrust_core::types::BasisPoints;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn bond() -> Offering {
        let terms = BondTerms {
            principal: 1_000,
            coupon_rate_bps: BasisPoints::new(500),
            total_supply: 1_000,
            maturity: now() + Duration::days(90),
            collateral_ratio_bps: BasisPoints::new(15_000),
            is_capped: false,
        };
        Offering::create(terms, &PlatformConfig::default(), now()).unwrap()
    }

    #[test]
    fn test_partial_then_full_fill() {
        let fees = FeeSchedule::default();
        let mut order = SellOrder::create(&bond(), 10, 1_100, now()).unwrap();

        let split = order.fill(4, &fees).unwrap();
        assert_eq!(split.gross, 4_400);
        assert_eq!(split.fee, 22);
        assert_eq!(order.quantity, 6);
        assert!(order.is_active);

        order.fill(6, &fees).unwrap();
        assert!(!order.is_active);
        assert_eq!(order.fill(1, &fees), Err(BtrustError::OrderNotActive));
    }

    #[test]
    fn test_overfill_rejected() {
        let mut order = SellOrder::create(&bond(), 5, 900, now()).unwrap();
        assert_eq!(
            order.fill(6, &FeeSchedule::default()),
            Err(BtrustError::ExceedsOrderQuantity {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(order.quantity, 5);
    }

    #[test]
    fn test_cancel() {
        let mut order = SellOrder::create(&bond(), 5, 900, now()).unwrap();
        assert_eq!(order.cancel(), Ok(5));
        assert_eq!(order.cancel(), Err(BtrustError::OrderNotActive));
    }

    #[test]
    fn test_create_rejections() {
        assert!(SellOrder::create(&bond(), 0, 900, now()).is_err());
        assert!(SellOrder::create(&bond(), 5, 0, now()).is_err());

        let mut closed = bond();
        closed.deposit_collateral(1).unwrap();
        closed.purchase(1, None, now()).unwrap();
        closed.liquidate().unwrap();
        assert_eq!(
            SellOrder::create(&closed, 5, 900, now()),
            Err(BtrustError::BondNotActive)
        );
    }
}
