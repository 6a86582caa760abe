//! # BTrust Core
//!
//! Core types and abstractions shared by the BTrust bond issuance crates.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Types**: `CollateralType`, `RiskRating`, `Term`, `BasisPoints`
//! - **Rate tables**: [`StepTable`], an ordered threshold lookup used for
//!   duration premiums and collateral adjustments
//! - **Lenient input**: [`NumericInput`], a form field that accepts numbers,
//!   strings or nothing and never fails to evaluate
//! - **Errors**: [`BtrustError`] and the [`Validate`] trait
//!
//! ## Example
//!
//! ```rust
//! use btrust_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let principal = NumericInput::from("1000");
//! assert_eq!(principal.value(), dec!(1000));
//!
//! let garbage = NumericInput::from("12abc");
//! assert_eq!(garbage.value(), dec!(0));
//!
//! assert_eq!(CollateralType::parse_lenient("USDC"), CollateralType::Stablecoin);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod input;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BtrustError, BtrustResult};
    pub use crate::input::NumericInput;
    pub use crate::types::{
        BasisPoints, CollateralType, PerCollateral, RiskRating, Step, StepDirection, StepTable,
        Term,
    };
    pub use crate::validation::{Validate, ValidationError};
}

// Re-export commonly used types at crate root
pub use error::{BtrustError, BtrustResult};
pub use input::NumericInput;
pub use types::{BasisPoints, CollateralType, PerCollateral, RiskRating, StepTable, Term};
pub use validation::{Validate, ValidationError};
