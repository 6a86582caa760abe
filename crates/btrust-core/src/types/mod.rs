//! Domain types for bond issuance analytics.
//!
//! - [`CollateralType`]: asset class backing a bond
//! - [`PerCollateral`]: one value per collateral type
//! - [`RiskRating`]: categorical risk bucket of an issuance
//! - [`Term`]: supported bond durations
//! - [`BasisPoints`]: integer rates in 1/10000
//! - [`StepTable`]: ordered threshold lookup for rate schedules

mod bps;
mod collateral;
mod risk;
mod step_table;
mod term;

pub use bps::{BasisPoints, BPS_DENOMINATOR};
pub use collateral::{CollateralType, PerCollateral};
pub use risk::RiskRating;
pub use step_table::{Step, StepDirection, StepTable};
pub use term::Term;
