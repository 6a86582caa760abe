//! Integer basis-point rates.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Basis points per unit (100% = 10 000 bps).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A rate expressed in whole basis points.
///
/// # Example
///
/// ```rust
/// use btrust_core::BasisPoints;
/// use rust_decimal_macros::dec;
///
/// let fee = BasisPoints::new(50);
/// assert_eq!(fee.as_percent(), dec!(0.5));
/// assert_eq!(fee.apply(1_000_000), Some(5_000));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u64);

impl BasisPoints {
    /// 100%.
    pub const ONE_HUNDRED_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a rate from basis points.
    pub const fn new(bps: u64) -> Self {
        Self(bps)
    }

    /// Returns the raw basis points.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the rate as a percentage (150 bps = 1.5).
    pub fn as_percent(self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    /// `amount * bps / 10000`, rounded down. `None` on overflow.
    pub fn apply(self, amount: u64) -> Option<u64> {
        amount.checked_mul(self.0)?.checked_div(BPS_DENOMINATOR)
    }
}

impl From<u64> for BasisPoints {
    fn from(bps: u64) -> Self {
        Self(bps)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}
