//! Health contribution for a single scheme and regime.
//!
//! The contribution base depends on the scheme:
//!
//! - Scale and linear taxpayers pay on net income, `max(0, income - expenses)`.
//! - Lump-sum taxpayers pay on gross income; expenses never reduce the base.
//!
//! Amounts are returned at full precision. Rounding to grosze is a
//! presentation step (see [`crate::format`]) and must not feed back into
//! further arithmetic.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use skladka_core::{CalculationInput, Regime, Scheme};
//! use skladka_core::calculations::ContributionCalculator;
//!
//! let calculator = ContributionCalculator::default();
//! let input = CalculationInput::new(
//!     dec!(10000),
//!     dec!(3000),
//!     Scheme::ScaleProgressive,
//!     Regime::Current,
//! );
//!
//! // 9% of 7000 net income
//! assert_eq!(calculator.compute(&input), dec!(630.00));
//! ```

use std::sync::LazyLock;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::rates::{ContributionRates, CurrentRates, FutureRates, RatesError};
use crate::{CalculationInput, CalculationResult, Regime, Scheme};

/// Calculator bound to a validated [`ContributionRates`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionCalculator {
    rates: ContributionRates,
}

static DEFAULT_CALCULATOR: LazyLock<ContributionCalculator> =
    LazyLock::new(ContributionCalculator::default);

impl Default for ContributionCalculator {
    fn default() -> Self {
        Self {
            rates: ContributionRates::default(),
        }
    }
}

impl ContributionCalculator {
    /// Creates a calculator for the given rate table.
    ///
    /// # Errors
    ///
    /// Returns [`RatesError`] if the table fails [`ContributionRates::validate`].
    pub fn new(rates: ContributionRates) -> Result<Self, RatesError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Shared calculator using the built-in rate table.
    pub fn standard() -> &'static Self {
        &DEFAULT_CALCULATOR
    }

    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Computes the monthly contribution for one scheme under one regime.
    ///
    /// Expects non-negative amounts; the result is never negative.
    pub fn compute(
        &self,
        input: &CalculationInput,
    ) -> Decimal {
        let amount = match input.regime {
            Regime::Current => current_contribution(&self.rates.current, input),
            Regime::Future => future_contribution(&self.rates.future, input),
        };

        debug!(
            income = %input.income,
            expenses = %input.expenses,
            scheme = input.scheme.as_str(),
            regime = input.regime.as_str(),
            amount = %amount,
            "computed contribution"
        );

        amount
    }

    /// Same as [`compute`](Self::compute), wrapped in a [`CalculationResult`].
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> CalculationResult {
        CalculationResult {
            contribution_amount: self.compute(input),
        }
    }
}

fn current_contribution(
    rates: &CurrentRates,
    input: &CalculationInput,
) -> Decimal {
    match input.scheme {
        Scheme::ScaleProgressive => percentage_with_minimum(input.net_income(), rates.scale_rate, rates.minimum),
        Scheme::FlatLinear => percentage_with_minimum(input.net_income(), rates.linear_rate, rates.minimum),
        Scheme::LumpSum => {
            if input.expenses > Decimal::ZERO {
                debug!(expenses = %input.expenses, "expenses ignored for lump-sum contribution");
            }
            lump_sum_tier_amount(rates, input.income)
        }
    }
}

fn percentage_with_minimum(
    base: Decimal,
    rate: Decimal,
    minimum: Decimal,
) -> Decimal {
    if base <= Decimal::ZERO {
        return minimum;
    }
    (base * rate).max(minimum)
}

fn lump_sum_tier_amount(
    rates: &CurrentRates,
    income: Decimal,
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    rates
        .lump_sum_tiers
        .iter()
        .find(|tier| income <= tier.up_to)
        .map_or(rates.lump_sum_top, |tier| tier.amount)
}

fn future_contribution(
    rates: &FutureRates,
    input: &CalculationInput,
) -> Decimal {
    match input.scheme {
        Scheme::ScaleProgressive | Scheme::FlatLinear => minimum_plus_excess(
            input.net_income(),
            rates.income_threshold,
            rates.income_rate,
            rates.minimum,
        ),
        Scheme::LumpSum => minimum_plus_excess(
            input.income,
            rates.lump_sum_threshold,
            rates.lump_sum_rate,
            rates.minimum,
        ),
    }
}

fn minimum_plus_excess(
    base: Decimal,
    threshold: Decimal,
    rate: Decimal,
    minimum: Decimal,
) -> Decimal {
    if base <= threshold {
        return minimum;
    }
    minimum.saturating_add((base - threshold) * rate)
}

/// Computes a contribution with the built-in rate table.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::{CalculationInput, Regime, Scheme, compute_contribution};
///
/// let input = CalculationInput::new(dec!(10000), dec!(0), Scheme::LumpSum, Regime::Current);
///
/// assert_eq!(compute_contribution(&input), dec!(769.43));
/// ```
pub fn compute_contribution(input: &CalculationInput) -> Decimal {
    ContributionCalculator::standard().compute(input)
}
