//! BTrust Configuration Layer
//!
//! This crate holds the tunable parameters of the BTrust bond analytics:
//!
//! - **Estimator Configuration**: base rate, yield floor, rate tables, credit
//!   spreads, collateral valuation scales and risk cut-offs
//! - **Platform Configuration**: fee rate, minimum collateral ratio,
//!   liquidation threshold and penalty, coupon cap
//! - **Loading**: TOML or JSON files, every field optional, validated on load
//!
//! # Example
//!
//! ```rust
//! use btrust_config::BtrustConfig;
//! use rust_decimal_macros::dec;
//!
//! let config = BtrustConfig::from_toml_str(r#"
//!     [estimator]
//!     yield_floor = 2.5
//! "#).unwrap();
//!
//! assert_eq!(config.estimator.yield_floor, dec!(2.5));
//! assert_eq!(config.estimator.base_rate, dec!(4.0));
//! assert_eq!(config.platform.fee_bps.value(), 50);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod estimator;
mod loader;
mod platform;

pub use error::{ConfigError, ConfigResult, ValidateExt};
pub use estimator::{EstimatorConfig, RiskThresholds, MIN_YIELD_FLOOR};
pub use loader::{BtrustConfig, CONFIG_ENV_VAR};
pub use platform::PlatformConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, ValidateExt};
    pub use crate::estimator::{EstimatorConfig, RiskThresholds};
    pub use crate::loader::BtrustConfig;
    pub use crate::platform::PlatformConfig;
}
