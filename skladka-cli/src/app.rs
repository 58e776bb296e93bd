use std::path::Path;

use anyhow::{Context, Result};
use skladka_core::calculations::{ContributionCalculator, ContributionRates};
use skladka_core::{CalculationRequest, ComparisonResult, Scheme};
use tracing::{debug, error, info};

use crate::csv_loader;
use crate::report::{self, OutputFormat};

/// Parses a rate table from TOML text and validates it.
///
/// # Errors
///
/// Fails when the text is not a valid table or the rates do not validate.
pub fn calculator_from_toml(text: &str) -> Result<ContributionCalculator> {
    let rates: ContributionRates = toml::from_str(text).context("invalid rate table")?;
    ContributionCalculator::new(rates).map_err(|e| {
        error!("rate table rejected: {e}");
        anyhow::Error::new(e).context("invalid rate table")
    })
}

/// Builds the calculator, reading an optional TOML rate file.
///
/// Without a file the built-in rates are used.
pub fn load_calculator(rates_path: Option<&Path>) -> Result<ContributionCalculator> {
    let Some(path) = rates_path else {
        debug!("using built-in rate table");
        return Ok(ContributionCalculator::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rate table {}", path.display()))?;
    let calculator = calculator_from_toml(&text)
        .with_context(|| format!("failed to load rate table {}", path.display()))?;
    info!(path = %path.display(), "loaded rate table");
    Ok(calculator)
}

/// Raw values of a single `compare` invocation.
#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub income: String,
    pub expenses: Option<String>,
    pub scheme: Scheme,
    /// Reject incomes that expenses consume completely.
    pub strict: bool,
}

/// Validates the arguments and runs a single comparison.
///
/// # Errors
///
/// Fails when the input does not validate.
pub fn compare_one(
    calculator: &ContributionCalculator,
    args: &CompareArgs,
) -> Result<ComparisonResult> {
    let mut request = CalculationRequest::parse(&args.income, args.expenses.as_deref(), args.scheme)?;
    if args.strict {
        request = request.require_positive_net_income()?;
    }
    Ok(request.compare_with(calculator))
}

/// Loads scenarios from a CSV file and compares each of them.
pub fn compare_batch(
    calculator: &ContributionCalculator,
    path: &Path,
) -> Result<Vec<ComparisonResult>> {
    let requests = csv_loader::load_from_file(path)
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
    debug!(rows = requests.len(), "loaded scenarios");

    Ok(requests
        .iter()
        .map(|request| request.compare_with(calculator))
        .collect())
}

/// Renders one comparison in the chosen format.
pub fn render_single(
    result: &ComparisonResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report::render_comparison(result)),
        OutputFormat::Json => Ok(report::render_json(std::slice::from_ref(result))?),
    }
}

/// Renders a batch of comparisons in the chosen format.
pub fn render_batch(
    results: &[ComparisonResult],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .enumerate()
            .map(|(idx, result)| report::render_summary_line(idx + 1, result))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(report::render_json(results)?),
    }
}
