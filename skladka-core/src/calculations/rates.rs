//! Rate tables for the health contribution.
//!
//! Both regimes are plain data so that a caller can load an adjusted table
//! (e.g. from a TOML file) without touching the calculator. The
//! [`Default`] implementation carries the amounts in force for the current
//! rules and for the 2026 reform.
//!
//! # Current regime
//!
//! | Scheme   | Rule |
//! |----------|------|
//! | Scale    | 9% of net income, at least the minimum |
//! | Linear   | 4.9% of net income, at least the minimum |
//! | Lump sum | Fixed amount picked by gross income tier |
//!
//! # Future regime
//!
//! | Scheme         | Rule |
//! |----------------|------|
//! | Scale / Linear | Minimum up to the threshold, then 4.9% of the excess |
//! | Lump sum       | Minimum up to the threshold, then 3.5% of the excess |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`ContributionRates::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatesError {
    /// A fixed amount or threshold is below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A percentage rate is outside `[0, 1]`.
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidRate { field: &'static str, value: Decimal },

    /// Lump-sum tier bounds must be strictly ascending.
    #[error("lump-sum tier bound {0} is not greater than the previous one")]
    UnorderedLumpSumTiers(Decimal),

    /// Lump-sum tier amounts must not decrease as income grows.
    #[error("lump-sum amount {0} is lower than the amount of the previous tier")]
    DecreasingLumpSumAmount(Decimal),
}

/// One bracket of the current lump-sum table: incomes up to and including
/// `up_to` pay `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumpSumTier {
    pub up_to: Decimal,
    pub amount: Decimal,
}

/// Rules in force before the reform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRates {
    /// Lowest monthly contribution for scale and linear taxpayers.
    pub minimum: Decimal,

    /// Share of net income paid on the progressive scale.
    pub scale_rate: Decimal,

    /// Share of net income paid on the flat linear tax.
    pub linear_rate: Decimal,

    /// Lump-sum brackets, ascending by `up_to`.
    pub lump_sum_tiers: Vec<LumpSumTier>,

    /// Lump-sum amount for incomes above the last tier.
    pub lump_sum_top: Decimal,
}

/// Rules introduced by the 2026 reform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureRates {
    /// Flat amount paid up to the relevant threshold, by every scheme.
    pub minimum: Decimal,

    /// Net income covered by the minimum for scale and linear taxpayers.
    pub income_threshold: Decimal,

    /// Rate applied to net income above `income_threshold`.
    pub income_rate: Decimal,

    /// Gross income covered by the minimum for lump-sum taxpayers.
    pub lump_sum_threshold: Decimal,

    /// Rate applied to gross income above `lump_sum_threshold`.
    pub lump_sum_rate: Decimal,
}

/// Complete rate table for both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    pub current: CurrentRates,
    pub future: FutureRates,
}

impl Default for CurrentRates {
    fn default() -> Self {
        Self {
            minimum: Decimal::new(31496, 2),
            scale_rate: Decimal::new(9, 2),
            linear_rate: Decimal::new(49, 3),
            lump_sum_tiers: vec![
                LumpSumTier {
                    up_to: Decimal::new(5000, 0),
                    amount: Decimal::new(46166, 2),
                },
                LumpSumTier {
                    up_to: Decimal::new(25000, 0),
                    amount: Decimal::new(76943, 2),
                },
            ],
            lump_sum_top: Decimal::new(138497, 2),
        }
    }
}

impl Default for FutureRates {
    fn default() -> Self {
        Self {
            minimum: Decimal::new(33750, 2),
            income_threshold: Decimal::new(12900, 0),
            income_rate: Decimal::new(49, 3),
            lump_sum_threshold: Decimal::new(25800, 0),
            lump_sum_rate: Decimal::new(35, 3),
        }
    }
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            current: CurrentRates::default(),
            future: FutureRates::default(),
        }
    }
}

fn check_amount(
    field: &'static str,
    value: Decimal,
) -> Result<(), RatesError> {
    if value < Decimal::ZERO {
        return Err(RatesError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_rate(
    field: &'static str,
    value: Decimal,
) -> Result<(), RatesError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RatesError::InvalidRate { field, value });
    }
    Ok(())
}

impl ContributionRates {
    /// Checks that every amount is non-negative, every rate lies in `[0, 1]`,
    /// and the lump-sum tiers ascend in both bound and amount.
    ///
    /// A table that passes keeps every contribution non-negative and
    /// non-decreasing in income.
    ///
    /// # Errors
    ///
    /// Returns the first [`RatesError`] found.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use skladka_core::calculations::{ContributionRates, RatesError};
    ///
    /// let mut rates = ContributionRates::default();
    /// rates.future.lump_sum_rate = dec!(1.5);
    ///
    /// assert_eq!(
    ///     rates.validate(),
    ///     Err(RatesError::InvalidRate { field: "future.lump_sum_rate", value: dec!(1.5) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RatesError> {
        let current = &self.current;
        check_amount("current.minimum", current.minimum)?;
        check_rate("current.scale_rate", current.scale_rate)?;
        check_rate("current.linear_rate", current.linear_rate)?;

        let mut previous: Option<&LumpSumTier> = None;
        for tier in &current.lump_sum_tiers {
            check_amount("current.lump_sum_tiers.up_to", tier.up_to)?;
            check_amount("current.lump_sum_tiers.amount", tier.amount)?;
            if let Some(prev) = previous {
                if tier.up_to <= prev.up_to {
                    return Err(RatesError::UnorderedLumpSumTiers(tier.up_to));
                }
                if tier.amount < prev.amount {
                    return Err(RatesError::DecreasingLumpSumAmount(tier.amount));
                }
            }
            previous = Some(tier);
        }
        check_amount("current.lump_sum_top", current.lump_sum_top)?;
        if let Some(last) = previous {
            if current.lump_sum_top < last.amount {
                return Err(RatesError::DecreasingLumpSumAmount(current.lump_sum_top));
            }
        }

        let future = &self.future;
        check_amount("future.minimum", future.minimum)?;
        check_amount("future.income_threshold", future.income_threshold)?;
        check_rate("future.income_rate", future.income_rate)?;
        check_amount("future.lump_sum_threshold", future.lump_sum_threshold)?;
        check_rate("future.lump_sum_rate", future.lump_sum_rate)?;

        Ok(())
    }
}
