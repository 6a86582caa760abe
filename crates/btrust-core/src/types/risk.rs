//! Risk rating buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical risk of a bond issuance.
///
/// Ordered from safest to riskiest, so `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    /// Well over-collateralised with non-custom collateral.
    Low,
    /// Neither low nor high.
    Medium,
    /// Thin collateral or custom-token collateral.
    High,
}

impl RiskRating {
    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(RiskRating::Low < RiskRating::Medium);
        assert!(RiskRating::Medium < RiskRating::High);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&RiskRating::Medium).unwrap(), "\"Medium\"");
        let parsed: RiskRating = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(parsed, RiskRating::High);
    }
}
