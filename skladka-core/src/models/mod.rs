mod calculation;
mod comparison;
mod regime;
mod scheme;

pub use calculation::{CalculationInput, CalculationResult};
pub use comparison::{BestScheme, ComparisonResult, SchemeAmount, Trend};
pub use regime::Regime;
pub use scheme::Scheme;
