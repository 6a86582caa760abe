//! Issuance request values.
//!
//! [`IssuanceForm`] is the raw request as typed by an issuer: any field may
//! be empty or malformed. Each edit produces a new form value; nothing is
//! mutated in place. [`IssuanceTerms`] is the normalised view the estimator
//! consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use btrust_core::types::{CollateralType, Term};
use btrust_core::validation::{Validate, ValidationError};
use btrust_core::NumericInput;

/// A bond issuance request as entered, possibly incomplete.
///
/// Deserializes from the issuance form's JSON shape. Numeric fields accept
/// numbers, strings or `null`; `collateralType` accepts canonical names or
/// token tickers.
///
/// ```rust
/// use btrust_issuance::IssuanceForm;
///
/// let form: IssuanceForm = serde_json::from_str(r#"{
///     "principal": "1000",
///     "totalSupply": 10000,
///     "durationMonths": 12,
///     "collateralAmount": "",
///     "collateralType": "native"
/// }"#).unwrap();
///
/// assert!(!form.collateral_amount.is_present());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuanceForm {
    /// Face value per unit.
    #[serde(alias = "principalAmount")]
    pub principal: NumericInput,

    /// Number of units to issue.
    pub total_supply: NumericInput,

    /// Term in months.
    pub duration_months: NumericInput,

    /// Collateral locked behind the issue.
    pub collateral_amount: NumericInput,

    /// Collateral asset class.
    #[serde(alias = "collateralToken", deserialize_with = "lenient_collateral")]
    pub collateral_type: CollateralType,
}

fn lenient_collateral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CollateralType, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.map_or_else(CollateralType::default, |t| CollateralType::parse_lenient(&t)))
}

impl IssuanceForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the principal replaced.
    pub fn with_principal(self, principal: impl Into<NumericInput>) -> Self {
        Self {
            principal: principal.into(),
            ..self
        }
    }

    /// Returns a copy with the total supply replaced.
    pub fn with_total_supply(self, supply: impl Into<NumericInput>) -> Self {
        Self {
            total_supply: supply.into(),
            ..self
        }
    }

    /// Returns a copy with the duration replaced.
    pub fn with_duration_months(self, months: impl Into<NumericInput>) -> Self {
        Self {
            duration_months: months.into(),
            ..self
        }
    }

    /// Returns a copy with the collateral amount replaced.
    pub fn with_collateral_amount(self, amount: impl Into<NumericInput>) -> Self {
        Self {
            collateral_amount: amount.into(),
            ..self
        }
    }

    /// Returns a copy with the collateral type replaced.
    pub fn with_collateral_type(self, collateral_type: CollateralType) -> Self {
        Self {
            collateral_type,
            ..self
        }
    }

    /// Normalises the form. Never fails: unusable fields read as zero.
    pub fn terms(&self) -> IssuanceTerms {
        IssuanceTerms {
            principal: self.principal.value(),
            total_supply: self.total_supply.whole_units(),
            duration_months: u32::try_from(self.duration_months.whole_units()).unwrap_or(u32::MAX),
            collateral_amount: self.collateral_amount.value(),
            collateral_type: self.collateral_type,
        }
    }

    /// Strictly validates the form and returns its terms.
    ///
    /// This is the check applied before a bond is deployed, as opposed to the
    /// per-keystroke estimate which tolerates anything.
    pub fn validated_terms(&self) -> Result<IssuanceTerms, Vec<ValidationError>> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self.terms())
        } else {
            Err(errors)
        }
    }
}

fn check_positive(field: &str, input: &NumericInput, errors: &mut Vec<ValidationError>) {
    if input.is_malformed() {
        errors.push(ValidationError::with_rule(field, "Not a number", "numeric"));
    } else {
        match input.raw() {
            None => errors.push(ValidationError::with_rule(field, "Required", "required")),
            Some(v) if v <= Decimal::ZERO => errors.push(ValidationError::with_rule(
                field,
                format!("Must be positive, got {v}"),
                "positive",
            )),
            Some(_) => {}
        }
    }
}

impl Validate for IssuanceForm {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        check_positive("principal", &self.principal, &mut errors);

        check_positive("total_supply", &self.total_supply, &mut errors);
        if let Some(supply) = self.total_supply.raw() {
            if supply > Decimal::ZERO && supply.fract() != Decimal::ZERO {
                errors.push(ValidationError::with_rule(
                    "total_supply",
                    format!("Must be a whole number of units, got {supply}"),
                    "integer",
                ));
            }
        }

        if self.duration_months.is_malformed() {
            errors.push(ValidationError::with_rule("duration_months", "Not a number", "numeric"));
        } else {
            match self.duration_months.raw() {
                None => errors.push(ValidationError::with_rule(
                    "duration_months",
                    "Required",
                    "required",
                )),
                Some(months) => {
                    let term = u32::try_from(self.duration_months.whole_units())
                        .ok()
                        .filter(|_| months.fract() == Decimal::ZERO)
                        .and_then(Term::from_months);
                    if term.is_none() {
                        errors.push(ValidationError::with_rule(
                            "duration_months",
                            format!("Must be one of 1, 3, 6, 12, got {months}"),
                            "supported_term",
                        ));
                    }
                }
            }
        }

        if self.collateral_amount.is_malformed() {
            errors.push(ValidationError::with_rule(
                "collateral_amount",
                "Not a number",
                "numeric",
            ));
        } else if let Some(amount) = self.collateral_amount.raw() {
            if amount.is_sign_negative() && !amount.is_zero() {
                errors.push(ValidationError::with_rule(
                    "collateral_amount",
                    format!("Cannot be negative, got {amount}"),
                    "non_negative",
                ));
            }
        }

        errors
    }
}

/// Normalised issuance parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceTerms {
    /// Face value per unit (≥ 0).
    pub principal: Decimal,
    /// Units to issue.
    pub total_supply: u64,
    /// Term in months.
    pub duration_months: u32,
    /// Collateral amount (≥ 0).
    pub collateral_amount: Decimal,
    /// Collateral asset class.
    pub collateral_type: CollateralType,
}

impl IssuanceTerms {
    /// Total face value outstanding, `None` on overflow.
    pub fn face_value(&self) -> Option<Decimal> {
        self.principal.checked_mul(Decimal::from(self.total_supply))
    }

    /// The term, if the duration is a supported one.
    pub fn term(&self) -> Option<Term> {
        Term::from_months(self.duration_months)
    }
}
