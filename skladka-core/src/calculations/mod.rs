//! Health contribution calculations.
//!
//! [`ContributionCalculator`] holds a validated [`ContributionRates`] table
//! and computes single contributions, current-vs-future comparisons and the
//! cheapest future scheme. The free functions use the built-in table.

pub mod common;
pub mod comparison;
pub mod contribution;
pub mod rates;

pub use comparison::{compare, select_best_future_scheme};
pub use contribution::{ContributionCalculator, compute_contribution};
pub use rates::{ContributionRates, CurrentRates, FutureRates, LumpSumTier, RatesError};
