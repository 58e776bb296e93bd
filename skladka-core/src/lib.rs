pub mod calculations;
pub mod format;
pub mod models;
pub mod validation;

pub use calculations::{ContributionCalculator, compare, compute_contribution, select_best_future_scheme};
pub use models::*;
pub use validation::{CalculationRequest, InputError};
