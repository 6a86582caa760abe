//! Coupon accrual.
//!
//! Coupon accrues linearly from the position's opening time on the units
//! currently held, valued at their average purchase price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use btrust_core::error::{BtrustError, BtrustResult};
use btrust_core::types::{BasisPoints, BPS_DENOMINATOR};

use crate::position::HolderPosition;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Result of a coupon claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldClaim {
    /// Coupon accrued since purchase.
    pub accrued: u64,
    /// Accrued coupon not yet claimed.
    pub owed: u64,
    /// Amount paid now, limited by the vault balance.
    pub paid: u64,
}

/// Coupon accrued by `position` at `coupon` up to `as_of`.
///
/// Time before the purchase counts as zero.
pub fn accrued(
    position: &HolderPosition,
    coupon: BasisPoints,
    as_of: DateTime<Utc>,
) -> BtrustResult<u64> {
    let held_seconds = u128::try_from((as_of - position.purchased_at).num_seconds()).unwrap_or(0);

    let annual = u128::from(position.quantity)
        .checked_mul(u128::from(position.purchase_price))
        .and_then(|v| v.checked_mul(u128::from(coupon.value())))
        .map(|v| v / u128::from(BPS_DENOMINATOR))
        .ok_or_else(|| BtrustError::overflow("annual yield"))?;

    let accrued = annual
        .checked_mul(held_seconds)
        .map(|v| v / u128::from(SECONDS_PER_YEAR))
        .ok_or_else(|| BtrustError::overflow("accrued yield"))?;

    u64::try_from(accrued).map_err(|_| BtrustError::overflow("accrued yield"))
}

/// Pays out accrued coupon from a vault holding `vault_balance`.
///
/// Updates the position's claimed total. A vault short of the full amount
/// pays what it holds.
///
/// # Errors
///
/// `NoYieldToClaim` if nothing is owed, `InsufficientYieldBalance` if the
/// vault is empty.
pub fn claim(
    position: &mut HolderPosition,
    coupon: BasisPoints,
    as_of: DateTime<Utc>,
    vault_balance: u64,
) -> BtrustResult<YieldClaim> {
    let accrued = accrued(position, coupon, as_of)?;
    let owed = accrued.saturating_sub(position.total_yield_claimed);
    if owed == 0 {
        return Err(BtrustError::NoYieldToClaim);
    }

    let paid = owed.min(vault_balance);
    if paid == 0 {
        return Err(BtrustError::InsufficientYieldBalance {
            owed,
            available: vault_balance,
        });
    }

    position.record_claim(paid)?;
    tracing::debug!(accrued, owed, paid, "coupon claimed");

    Ok(YieldClaim { accrued, owed, paid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn position() -> HolderPosition {
        HolderPosition::open(100, 1_000, t0()).unwrap()
    }

    #[test]
    fn test_full_year_accrual() {
        // 100 × 1000 × 8% = 8000 per year
        let as_of = t0() + Duration::seconds(SECONDS_PER_YEAR as i64);
        assert_eq!(accrued(&position(), BasisPoints::new(800), as_of).unwrap(), 8_000);
    }

    #[test]
    fn test_partial_year_rounds_down() {
        let as_of = t0() + Duration::days(1);
        // 8000 × 86400 / 31536000 = 21.9
        assert_eq!(accrued(&position(), BasisPoints::new(800), as_of).unwrap(), 21);
    }

    #[test]
    fn test_before_purchase_is_zero() {
        let as_of = t0() - Duration::days(10);
        assert_eq!(accrued(&position(), BasisPoints::new(800), as_of).unwrap(), 0);
    }

    #[test]
    fn test_claim_and_reclaim() {
        let mut pos = position();
        let half_year = t0() + Duration::seconds(SECONDS_PER_YEAR as i64 / 2);

        let first = claim(&mut pos, BasisPoints::new(800), half_year, 1_000_000).unwrap();
        assert_eq!(first.paid, 4_000);
        assert_eq!(pos.total_yield_claimed, 4_000);

        assert_eq!(
            claim(&mut pos, BasisPoints::new(800), half_year, 1_000_000),
            Err(BtrustError::NoYieldToClaim)
        );
    }

    #[test]
    fn test_partial_vault() {
        let mut pos = position();
        let year = t0() + Duration::seconds(SECONDS_PER_YEAR as i64);

        let c = claim(&mut pos, BasisPoints::new(800), year, 3_000).unwrap();
        assert_eq!(c.owed, 8_000);
        assert_eq!(c.paid, 3_000);

        let c = claim(&mut pos, BasisPoints::new(800), year, 10_000).unwrap();
        assert_eq!(c.owed, 5_000);
        assert_eq!(c.paid, 5_000);
    }

    #[test]
    fn test_empty_vault() {
        let mut pos = position();
        let year = t0() + Duration::seconds(SECONDS_PER_YEAR as i64);
        assert_eq!(
            claim(&mut pos, BasisPoints::new(800), year, 0),
            Err(BtrustError::InsufficientYieldBalance {
                owed: 8_000,
                available: 0
            })
        );
        assert_eq!(pos.total_yield_claimed, 0);
    }

    #[test]
    fn test_zero_coupon() {
        let mut pos = position();
        let year = t0() + Duration::seconds(SECONDS_PER_YEAR as i64);
        assert_eq!(
            claim(&mut pos, BasisPoints::new(0), year, 100),
            Err(BtrustError::NoYieldToClaim)
        );
    }
}
