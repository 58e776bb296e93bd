use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Scheme;

/// Cheapest scheme(s) under the future regime.
///
/// `schemes` is never empty. When several schemes produce exactly the same
/// minimal amount all of them are listed, in [`Scheme::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScheme {
    pub schemes: Vec<Scheme>,
    pub amount: Decimal,
}

impl BestScheme {
    pub fn is_tie(&self) -> bool {
        self.schemes.len() > 1
    }

    pub fn contains(&self, scheme: Scheme) -> bool {
        self.schemes.contains(&scheme)
    }
}

/// Future-regime contribution of one scheme for the same income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeAmount {
    pub scheme: Scheme,
    pub amount: Decimal,
}

/// Direction of the change between the current and future contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
    Unchanged,
}

/// Current vs. future contribution for one scheme, plus the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net_income: Decimal,
    pub scheme: Scheme,

    pub current_amount: Decimal,
    pub future_amount: Decimal,
    /// `future_amount - current_amount`; positive means the contribution grows.
    pub difference: Decimal,
    /// `difference / current_amount * 100`, or zero when `current_amount` is zero.
    pub percent_change: Decimal,

    /// Future contribution of every scheme, in [`Scheme::ALL`] order.
    pub future_by_scheme: Vec<SchemeAmount>,
    pub best_scheme: BestScheme,
}

impl ComparisonResult {
    pub fn trend(&self) -> Trend {
        if self.difference > Decimal::ZERO {
            Trend::Increase
        } else if self.difference < Decimal::ZERO {
            Trend::Decrease
        } else {
            Trend::Unchanged
        }
    }

    /// Whether the chosen scheme is (one of) the cheapest under the future regime.
    pub fn is_scheme_optimal(&self) -> bool {
        self.best_scheme.contains(self.scheme)
    }

    /// Monthly amount saved in 2026 by switching to the best scheme.
    pub fn potential_savings(&self) -> Decimal {
        (self.future_amount - self.best_scheme.amount).max(Decimal::ZERO)
    }
}
