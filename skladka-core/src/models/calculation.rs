use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Regime, Scheme};

/// Arguments for a single contribution calculation.
///
/// Amounts are monthly PLN values already checked to be non-negative
/// (see [`crate::validation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub income: Decimal,
    pub expenses: Decimal,
    pub scheme: Scheme,
    pub regime: Regime,
}

impl CalculationInput {
    pub fn new(
        income: Decimal,
        expenses: Decimal,
        scheme: Scheme,
        regime: Regime,
    ) -> Self {
        Self {
            income,
            expenses,
            scheme,
            regime,
        }
    }

    /// Income less expenses, floored at zero.
    pub fn net_income(&self) -> Decimal {
        (self.income - self.expenses).max(Decimal::ZERO)
    }
}

/// Outcome of a single contribution calculation. Never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub contribution_amount: Decimal,
}
