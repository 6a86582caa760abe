//! Ordered threshold lookups.
//!
//! Rate schedules such as "≤ 3 months → 1.5%" or "≥ 150% collateral → −1%"
//! are step functions. [`StepTable`] stores them as data so that each tier
//! boundary can be inspected, configured and tested on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationError};

/// How a key is compared against step thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// A step applies when `key <= threshold`; the tightest threshold wins.
    AtMost,
    /// A step applies when `key >= threshold`; the highest threshold wins.
    AtLeast,
}

/// One tier of a step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Tier boundary (inclusive).
    pub threshold: Decimal,
    /// Value returned for keys inside this tier.
    pub value: Decimal,
}

impl Step {
    /// Creates a step.
    pub fn new(threshold: Decimal, value: Decimal) -> Self {
        Self { threshold, value }
    }
}

/// A step function over decimals.
///
/// Lookup does not depend on the order the steps were declared in.
///
/// # Example
///
/// ```rust
/// use btrust_core::types::{Step, StepDirection, StepTable};
/// use rust_decimal_macros::dec;
///
/// let premium = StepTable::new(
///     StepDirection::AtMost,
///     vec![Step::new(dec!(1), dec!(0)), Step::new(dec!(3), dec!(1.5))],
///     dec!(4),
/// );
/// assert_eq!(premium.lookup(dec!(1)), dec!(0));
/// assert_eq!(premium.lookup(dec!(2)), dec!(1.5));
/// assert_eq!(premium.lookup(dec!(12)), dec!(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTable {
    direction: StepDirection,
    otherwise: Decimal,
    steps: Vec<Step>,
}

impl StepTable {
    /// Creates a table. Steps are kept sorted in evaluation order.
    pub fn new(direction: StepDirection, mut steps: Vec<Step>, otherwise: Decimal) -> Self {
        match direction {
            StepDirection::AtMost => steps.sort_by(|a, b| a.threshold.cmp(&b.threshold)),
            StepDirection::AtLeast => steps.sort_by(|a, b| b.threshold.cmp(&a.threshold)),
        }
        Self {
            direction,
            otherwise,
            steps,
        }
    }

    /// Comparison direction.
    pub fn direction(&self) -> StepDirection {
        self.direction
    }

    /// The tiers.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Value for keys matched by no tier.
    pub fn otherwise(&self) -> Decimal {
        self.otherwise
    }

    /// Returns the step matching `key`, if any.
    pub fn matching_step(&self, key: Decimal) -> Option<&Step> {
        match self.direction {
            StepDirection::AtMost => self
                .steps
                .iter()
                .filter(|s| key <= s.threshold)
                .min_by(|a, b| a.threshold.cmp(&b.threshold)),
            StepDirection::AtLeast => self
                .steps
                .iter()
                .filter(|s| key >= s.threshold)
                .max_by(|a, b| a.threshold.cmp(&b.threshold)),
        }
    }

    /// Evaluates the step function at `key`.
    pub fn lookup(&self, key: Decimal) -> Decimal {
        self.matching_step(key).map_or(self.otherwise, |s| s.value)
    }

    /// Returns true if the function never increases as `key` grows.
    pub fn is_non_increasing(&self) -> bool {
        self.ascending_values().windows(2).all(|w| w[1] <= w[0])
    }

    /// Returns true if the function never decreases as `key` grows.
    pub fn is_non_decreasing(&self) -> bool {
        self.ascending_values().windows(2).all(|w| w[1] >= w[0])
    }

    /// Tier values ordered by increasing key, including the fallback.
    fn ascending_values(&self) -> Vec<Decimal> {
        let mut sorted = self.steps.clone();
        sorted.sort_by(|a, b| a.threshold.cmp(&b.threshold));
        let tiers = sorted.into_iter().map(|s| s.value);
        match self.direction {
            StepDirection::AtMost => tiers.chain(std::iter::once(self.otherwise)).collect(),
            StepDirection::AtLeast => std::iter::once(self.otherwise).chain(tiers).collect(),
        }
    }
}

impl Validate for StepTable {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut thresholds: Vec<Decimal> = self.steps.iter().map(|s| s.threshold).collect();
        thresholds.sort();
        if thresholds.windows(2).any(|w| w[0] == w[1]) {
            errors.push(ValidationError::with_rule(
                "steps",
                "thresholds must be distinct",
                "distinct_thresholds",
            ));
        }
        errors
    }
}
