//! Error types for the BTrust crates.
//!
//! The yield estimator itself never fails; these errors belong to the
//! stricter operations around it (issuance checks, fees, accrual,
//! liquidation) where a bad request has to be rejected.

use thiserror::Error;

/// A specialized Result type for BTrust operations.
pub type BtrustResult<T> = Result<T, BtrustError>;

/// The main error type for BTrust operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BtrustError {
    /// Amount or quantity must be positive.
    #[error("Invalid amount: {reason}")]
    InvalidAmount {
        /// Description of the invalid amount.
        reason: String,
    },

    /// Principal must be positive.
    #[error("Invalid principal: {reason}")]
    InvalidPrincipal {
        /// Description of the invalid principal.
        reason: String,
    },

    /// Supply must be positive.
    #[error("Invalid supply: {reason}")]
    InvalidSupply {
        /// Description of the invalid supply.
        reason: String,
    },

    /// Coupon rate outside 0..=10000 bps.
    #[error("Invalid coupon rate: {bps} bps exceeds the 10000 bps cap")]
    InvalidCouponRate {
        /// The rejected coupon rate in basis points.
        bps: u64,
    },

    /// Maturity is not in the future.
    #[error("Invalid maturity: {reason}")]
    InvalidMaturity {
        /// Description of the invalid maturity.
        reason: String,
    },

    /// Purchase would exceed a capped offering.
    #[error("Purchase of {requested} exceeds remaining supply of {available}")]
    ExceedsSupply {
        /// Units requested.
        requested: u64,
        /// Units still available.
        available: u64,
    },

    /// Fill quantity exceeds what the order still offers.
    #[error("Fill of {requested} exceeds order quantity of {available}")]
    ExceedsOrderQuantity {
        /// Units requested.
        requested: u64,
        /// Units left on the order.
        available: u64,
    },

    /// Integer arithmetic overflowed.
    #[error("Math overflow in {operation}")]
    MathOverflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Bond is no longer active.
    #[error("Bond is not active")]
    BondNotActive,

    /// Bond has already matured.
    #[error("Bond has matured")]
    BondMatured,

    /// Sell order is filled or cancelled.
    #[error("Order is not active")]
    OrderNotActive,

    /// No coupon has accrued beyond what was already claimed.
    #[error("No yield to claim")]
    NoYieldToClaim,

    /// The yield vault cannot pay anything towards the amount owed.
    #[error("Insufficient yield balance: {owed} owed, vault holds {available}")]
    InsufficientYieldBalance {
        /// Amount owed to the holder.
        owed: u64,
        /// Amount in the vault.
        available: u64,
    },

    /// Redemption attempted before maturity.
    #[error("Bond has not matured")]
    BondNotMatured,

    /// Holder does not own enough units.
    #[error("Insufficient balance: {requested} requested, {held} held")]
    InsufficientBalance {
        /// Units requested.
        requested: u64,
        /// Units held.
        held: u64,
    },

    /// Collateral is still above the liquidation threshold.
    #[error("Bond is not liquidatable: collateral {deposited} meets requirement {required}")]
    NotLiquidatable {
        /// Deposited collateral.
        deposited: u64,
        /// Collateral required at the liquidation threshold.
        required: u64,
    },

    /// There is no collateral to liquidate.
    #[error("No collateral deposited")]
    NoCollateral,

    /// Input could not be interpreted.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Field name.
        field: String,
        /// Description of the problem.
        reason: String,
    },
}

impl BtrustError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            reason: reason.into(),
        }
    }

    /// Creates a math overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::MathOverflow {
            operation: operation.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
