//! Current vs. future comparison and the best-scheme recommendation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::percent_change;
use crate::calculations::contribution::ContributionCalculator;
use crate::{BestScheme, CalculationInput, ComparisonResult, Regime, Scheme, SchemeAmount};

impl ContributionCalculator {
    /// Future-regime contribution of every scheme for the same income.
    ///
    /// Scale and linear use `expenses` as given; lump sum is evaluated with no
    /// expenses since lump-sum taxpayers cannot deduct them.
    pub fn future_breakdown(
        &self,
        income: Decimal,
        expenses: Decimal,
    ) -> Vec<SchemeAmount> {
        Scheme::ALL
            .iter()
            .map(|&scheme| {
                let scheme_expenses = if scheme.deducts_expenses() {
                    expenses
                } else {
                    Decimal::ZERO
                };
                let amount = self.compute(&CalculationInput::new(
                    income,
                    scheme_expenses,
                    scheme,
                    Regime::Future,
                ));
                SchemeAmount { scheme, amount }
            })
            .collect()
    }

    /// Finds the scheme(s) with the lowest contribution under the future regime.
    ///
    /// Amounts come from [`future_breakdown`](Self::future_breakdown) and are
    /// compared exactly; every scheme matching the minimum is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use skladka_core::Scheme;
    /// use skladka_core::calculations::ContributionCalculator;
    ///
    /// let best = ContributionCalculator::default().select_best_future_scheme(dec!(40000), dec!(0));
    ///
    /// assert_eq!(best.schemes, vec![Scheme::LumpSum]);
    /// assert_eq!(best.amount, dec!(834.50));
    /// ```
    pub fn select_best_future_scheme(
        &self,
        income: Decimal,
        expenses: Decimal,
    ) -> BestScheme {
        let best = best_of(&self.future_breakdown(income, expenses));

        debug!(
            income = %income,
            expenses = %expenses,
            schemes = ?best.schemes,
            amount = %best.amount,
            "selected best future scheme"
        );

        best
    }

    /// Compares the current and future contribution for `scheme` and attaches
    /// the best future scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use skladka_core::Scheme;
    /// use skladka_core::calculations::ContributionCalculator;
    ///
    /// let result = ContributionCalculator::default().compare(
    ///     dec!(10000),
    ///     dec!(3000),
    ///     Scheme::ScaleProgressive,
    /// );
    ///
    /// assert_eq!(result.current_amount, dec!(630.00));
    /// assert_eq!(result.future_amount, dec!(337.50));
    /// assert_eq!(result.difference, dec!(-292.50));
    /// ```
    pub fn compare(
        &self,
        income: Decimal,
        expenses: Decimal,
        scheme: Scheme,
    ) -> ComparisonResult {
        let current = CalculationInput::new(income, expenses, scheme, Regime::Current);
        let future = CalculationInput {
            regime: Regime::Future,
            ..current
        };

        let current_amount = self.compute(&current);
        let future_amount = self.compute(&future);
        let difference = future_amount - current_amount;
        let future_by_scheme = self.future_breakdown(income, expenses);
        let best_scheme = best_of(&future_by_scheme);

        ComparisonResult {
            income,
            expenses,
            net_income: current.net_income(),
            scheme,
            current_amount,
            future_amount,
            difference,
            percent_change: percent_change(difference, current_amount),
            future_by_scheme,
            best_scheme,
        }
    }
}

/// Minimum of `amounts`, keeping every scheme tied at that minimum.
fn best_of(amounts: &[SchemeAmount]) -> BestScheme {
    let mut best = BestScheme {
        schemes: Vec::with_capacity(amounts.len()),
        amount: Decimal::MAX,
    };

    for entry in amounts {
        if entry.amount < best.amount {
            best.schemes.clear();
            best.schemes.push(entry.scheme);
            best.amount = entry.amount;
        } else if entry.amount == best.amount {
            best.schemes.push(entry.scheme);
        }
    }

    best
}

/// [`ContributionCalculator::select_best_future_scheme`] with the built-in rate table.
pub fn select_best_future_scheme(
    income: Decimal,
    expenses: Decimal,
) -> BestScheme {
    ContributionCalculator::standard().select_best_future_scheme(income, expenses)
}

/// [`ContributionCalculator::compare`] with the built-in rate table.
pub fn compare(
    income: Decimal,
    expenses: Decimal,
    scheme: Scheme,
) -> ComparisonResult {
    ContributionCalculator::standard().compare(income, expenses, scheme)
}
