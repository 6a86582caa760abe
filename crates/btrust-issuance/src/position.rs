//! Holder positions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use btrust_core::error::{BtrustError, BtrustResult};

/// Units of one bond held by one holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderPosition {
    /// Units held.
    pub quantity: u64,
    /// Average price paid per unit, rounded down.
    pub purchase_price: u64,
    /// Coupon already paid out.
    pub total_yield_claimed: u64,
    /// When the position was opened; accrual runs from here.
    pub purchased_at: DateTime<Utc>,
}

impl HolderPosition {
    /// Opens a position from a first purchase.
    pub fn open(quantity: u64, price_per_unit: u64, at: DateTime<Utc>) -> BtrustResult<Self> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        Ok(Self {
            quantity,
            purchase_price: price_per_unit,
            total_yield_claimed: 0,
            purchased_at: at,
        })
    }

    /// Adds units bought for `payment` in total, averaging the purchase price.
    ///
    /// The opening timestamp is kept.
    pub fn add_purchase(&mut self, quantity: u64, payment: u64) -> BtrustResult<()> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }

        let held_cost = u128::from(self.quantity) * u128::from(self.purchase_price);
        let total_cost = held_cost + u128::from(payment);
        let new_quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| BtrustError::overflow("position quantity"))?;
        let average = u64::try_from(total_cost / u128::from(new_quantity))
            .map_err(|_| BtrustError::overflow("average price"))?;

        self.quantity = new_quantity;
        self.purchase_price = average;
        Ok(())
    }

    /// Removes units on redemption or sale.
    pub fn remove(&mut self, quantity: u64) -> BtrustResult<()> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        if quantity > self.quantity {
            return Err(BtrustError::InsufficientBalance {
                requested: quantity,
                held: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Records a coupon payment.
    pub fn record_claim(&mut self, amount: u64) -> BtrustResult<()> {
        self.total_yield_claimed = self
            .total_yield_claimed
            .checked_add(amount)
            .ok_or_else(|| BtrustError::overflow("claimed yield"))?;
        Ok(())
    }

    /// Returns true once every unit is gone.
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_open() {
        let pos = HolderPosition::open(10, 1_000, t0()).unwrap();
        assert_eq!(pos.quantity, 10);
        assert_eq!(pos.purchase_price, 1_000);
        assert_eq!(pos.total_yield_claimed, 0);
        assert!(HolderPosition::open(0, 1_000, t0()).is_err());
    }

    #[test]
    fn test_average_price() {
        let mut pos = HolderPosition::open(10, 1_000, t0()).unwrap();
        // 10 @ 1000 + 30 for 36000 → 46000 / 40
        pos.add_purchase(30, 36_000).unwrap();
        assert_eq!(pos.quantity, 40);
        assert_eq!(pos.purchase_price, 1_150);
    }

    #[test]
    fn test_average_price_rounds_down() {
        let mut pos = HolderPosition::open(2, 10, t0()).unwrap();
        pos.add_purchase(1, 11).unwrap();
        // (20 + 11) / 3 = 10.33
        assert_eq!(pos.purchase_price, 10);
    }

    #[test]
    fn test_remove() {
        let mut pos = HolderPosition::open(5, 100, t0()).unwrap();
        assert!(matches!(
            pos.remove(6),
            Err(BtrustError::InsufficientBalance { requested: 6, held: 5 })
        ));
        pos.remove(5).unwrap();
        assert!(pos.is_empty());
    }

    #[test]
    fn test_record_claim() {
        let mut pos = HolderPosition::open(5, 100, t0()).unwrap();
        pos.record_claim(7).unwrap();
        pos.record_claim(3).unwrap();
        assert_eq!(pos.total_yield_claimed, 10);
    }
}
