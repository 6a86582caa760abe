//! Bond durations offered by the issuance flow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BtrustError;

/// Supported bond terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Term {
    /// One month.
    OneMonth,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
    /// Twelve months.
    TwelveMonths,
}

impl Term {
    /// All supported terms, shortest first.
    pub const ALL: [Term; 4] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::TwelveMonths,
    ];

    /// Length in months.
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    /// Returns the term for an exact month count.
    pub fn from_months(months: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.months() == months)
    }
}

impl TryFrom<u32> for Term {
    type Error = BtrustError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::from_months(months).ok_or_else(|| {
            BtrustError::invalid_input(
                "duration_months",
                format!("{months} is not one of 1, 3, 6, 12"),
            )
        })
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> Self {
        term.months()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.months() {
            1 => write!(f, "1 month"),
            m => write!(f, "{m} months"),
        }
    }
}
