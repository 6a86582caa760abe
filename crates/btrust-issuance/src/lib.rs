//! BTrust Bond Issuance
//!
//! This crate implements the issuance side of the BTrust bond platform:
//!
//! - **Issuance Form**: lenient request values and strict pre-deploy checks
//! - **Yield Estimator**: collateral ratio, indicative yield and risk rating
//! - **Platform Economics**: fees, holder positions, coupon accrual
//! - **Collateral**: health assessment and liquidation payouts
//! - **Secondary Market**: sell orders
//!
//! # Example
//!
//! ```rust
//! use btrust_issuance::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let form = IssuanceForm::new()
//!     .with_principal("1000")
//!     .with_total_supply("50000")
//!     .with_duration_months("3")
//!     .with_collateral_amount("150000")
//!     .with_collateral_type(CollateralType::Stablecoin);
//!
//! let estimate = estimate(&form);
//! assert_eq!(estimate.collateral_ratio_percent, dec!(0.3));
//! assert_eq!(estimate.estimated_yield_percent, dec!(7.50));
//! assert_eq!(estimate.risk_rating, RiskRating::High);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_wrap)]
#![deny(unsafe_code)]

pub mod accrual;
pub mod bond;
pub mod collateral;
pub mod estimator;
pub mod fees;
pub mod form;
pub mod order;
pub mod position;
pub mod risk;

pub use accrual::{YieldClaim, SECONDS_PER_YEAR};
pub use bond::{BondTerms, Offering, Purchase};
pub use collateral::{CollateralHealth, CollateralPolicy, LiquidationPayout};
pub use estimator::{estimate, YieldBreakdown, YieldEstimate, YieldEstimator};
pub use fees::{FeeSchedule, PaymentSplit};
pub use form::{IssuanceForm, IssuanceTerms};
pub use order::SellOrder;
pub use position::HolderPosition;
pub use risk::rate_risk;

pub use btrust_core::error::{BtrustError, BtrustResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::{BondTerms, Offering};
    pub use crate::collateral::{CollateralHealth, CollateralPolicy};
    pub use crate::estimator::{estimate, YieldBreakdown, YieldEstimate, YieldEstimator};
    pub use crate::fees::{FeeSchedule, PaymentSplit};
    pub use crate::form::{IssuanceForm, IssuanceTerms};
    pub use crate::position::HolderPosition;
    pub use btrust_core::prelude::*;
}
