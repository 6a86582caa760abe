//! Collateral asset classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BtrustError;

/// Asset class locked as collateral behind a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollateralType {
    /// The chain's native token (SOL and liquid-staked variants).
    #[default]
    #[serde(alias = "native-token")]
    Native,
    /// A fiat-pegged stablecoin.
    Stablecoin,
    /// Any other project token.
    #[serde(alias = "custom-token")]
    Custom,
}

impl CollateralType {
    /// All collateral types.
    pub const ALL: [CollateralType; 3] = [Self::Native, Self::Stablecoin, Self::Custom];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Stablecoin => "stablecoin",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Native => "Native token",
            Self::Stablecoin => "Stablecoin",
            Self::Custom => "Custom token",
        }
    }

    /// Interprets a form value without failing.
    ///
    /// Canonical names, their `-token` spellings and common token tickers
    /// are recognised. An empty value is the form default (native). Any other
    /// ticker names a project token and is therefore custom.
    pub fn parse_lenient(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self::from_str(trimmed).unwrap_or(Self::Custom)
    }
}

impl FromStr for CollateralType {
    type Err = BtrustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "native-token" | "sol" | "msol" | "jitosol" => Ok(Self::Native),
            "stablecoin" | "stable" | "usdc" | "usdt" | "pyusd" => Ok(Self::Stablecoin),
            "custom" | "custom-token" => Ok(Self::Custom),
            other => Err(BtrustError::invalid_input(
                "collateral_type",
                format!("unknown collateral type '{other}'"),
            )),
        }
    }
}

impl fmt::Display for CollateralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per collateral type.
///
/// Used for schedules keyed by asset class, such as credit spreads and
/// valuation scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerCollateral<T> {
    /// Value for native-token collateral.
    pub native: T,
    /// Value for stablecoin collateral.
    pub stablecoin: T,
    /// Value for custom-token collateral.
    pub custom: T,
}

impl<T> PerCollateral<T> {
    /// Creates a schedule from its three entries.
    pub fn new(native: T, stablecoin: T, custom: T) -> Self {
        Self {
            native,
            stablecoin,
            custom,
        }
    }

    /// Returns the entry for `collateral`.
    pub fn get(&self, collateral: CollateralType) -> &T {
        match collateral {
            CollateralType::Native => &self.native,
            CollateralType::Stablecoin => &self.stablecoin,
            CollateralType::Custom => &self.custom,
        }
    }

    /// Iterates over `(type, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CollateralType, &T)> {
        CollateralType::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T: Clone> PerCollateral<T> {
    /// The same value for every collateral type.
    pub fn uniform(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value)
    }
}
