//! Validation of raw user input before it reaches the calculator.
//!
//! The calculator assumes non-negative amounts. Everything that arrives as
//! text (form fields, command-line arguments, CSV cells) passes through here
//! first.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::ContributionCalculator;
use crate::{ComparisonResult, Scheme};

/// Which input an [`InputError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Income,
    Expenses,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.write_str("income"),
            Self::Expenses => f.write_str("expenses"),
        }
    }
}

/// Reasons raw input is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required amount was empty.
    #[error("{0} is required")]
    Missing(AmountField),

    /// The text is not a decimal number.
    #[error("{field} must be a number, got '{input}'")]
    NotNumeric { field: AmountField, input: String },

    /// The amount is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: AmountField, value: Decimal },

    /// Expenses consume the whole income (stricter check only).
    #[error("income {income} does not exceed expenses {expenses}")]
    NonPositiveNetIncome { income: Decimal, expenses: Decimal },
}

/// Normalizes input for decimal parsing.
///
/// Drops whitespace used as a thousands separator (including the no-break
/// spaces produced by Polish number formatting) and accepts a comma as the
/// decimal separator.
fn normalize_amount_input(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses one monetary amount.
///
/// # Errors
///
/// - [`InputError::Missing`] for empty or whitespace-only input
/// - [`InputError::NotNumeric`] when the text is not a decimal number
/// - [`InputError::Negative`] when the value is below zero
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::validation::{AmountField, parse_amount};
///
/// assert_eq!(parse_amount(AmountField::Income, "12 500,50"), Ok(dec!(12500.50)));
/// assert!(parse_amount(AmountField::Income, "-1").is_err());
/// ```
pub fn parse_amount(
    field: AmountField,
    raw: &str,
) -> Result<Decimal, InputError> {
    let normalized = normalize_amount_input(raw);
    if normalized.is_empty() {
        return Err(InputError::Missing(field));
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        warn!(%field, input = %raw, "rejected non-numeric amount: {}", e);
        InputError::NotNumeric {
            field,
            input: raw.to_string(),
        }
    })?;

    if value < Decimal::ZERO {
        warn!(%field, value = %value, "rejected negative amount");
        return Err(InputError::Negative { field, value });
    }

    Ok(value)
}

/// A validated request for [`ContributionCalculator::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub income: Decimal,
    pub expenses: Decimal,
    pub scheme: Scheme,
}

impl CalculationRequest {
    /// Validates raw income and expenses.
    ///
    /// Income is required. Expenses default to zero when omitted or blank,
    /// but malformed expenses are rejected rather than coerced.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found, income first.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use skladka_core::{CalculationRequest, Scheme};
    ///
    /// let request = CalculationRequest::parse("10000", None, Scheme::LumpSum).unwrap();
    ///
    /// assert_eq!(request.income, dec!(10000));
    /// assert_eq!(request.expenses, dec!(0));
    /// ```
    pub fn parse(
        income: &str,
        expenses: Option<&str>,
        scheme: Scheme,
    ) -> Result<Self, InputError> {
        let income = parse_amount(AmountField::Income, income)?;
        let expenses = match expenses {
            Some(raw) if !raw.trim().is_empty() => parse_amount(AmountField::Expenses, raw)?,
            _ => Decimal::ZERO,
        };

        Ok(Self {
            income,
            expenses,
            scheme,
        })
    }

    /// Stricter variant: rejects requests whose expenses consume the whole income.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonPositiveNetIncome`] when `income - expenses <= 0`.
    pub fn require_positive_net_income(self) -> Result<Self, InputError> {
        if self.income - self.expenses <= Decimal::ZERO {
            warn!(
                income = %self.income,
                expenses = %self.expenses,
                "rejected request without positive net income"
            );
            return Err(InputError::NonPositiveNetIncome {
                income: self.income,
                expenses: self.expenses,
            });
        }
        Ok(self)
    }

    /// Runs the comparison for this request.
    pub fn compare_with(
        &self,
        calculator: &ContributionCalculator,
    ) -> ComparisonResult {
        calculator.compare(self.income, self.expenses, self.scheme)
    }
}
