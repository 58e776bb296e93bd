//! CSV loader for batches of comparison scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column     | Required | Type    | Notes                                  |
//! |------------|----------|---------|----------------------------------------|
//! | `income`   | yes      | decimal | Monthly gross income in PLN            |
//! | `expenses` | no       | decimal | Empty cell or missing column means 0   |
//! | `scheme`   | yes      | string  | One of: `skala`, `liniowka`, `ryczalt` |
//!
//! Amounts go through [`skladka_core::validation`], so a quoted cell may use
//! a decimal comma (`"3000,50"`).
//!
//! ### Example
//!
//! ```csv
//! income,expenses,scheme
//! 10000,3000,skala
//! 30000,,ryczalt
//! ```

use serde::Deserialize;
use skladka_core::validation::InputError;
use skladka_core::{CalculationRequest, Scheme};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    income: String,
    expenses: Option<String>,
    scheme: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading scenario rows.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The CSV itself is malformed (bad structure, missing required column).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `scheme` cell is not one of the recognised codes.
    #[error("unrecognised scheme '{scheme}' on row {row}")]
    InvalidScheme { scheme: String, row: usize },

    /// An amount failed validation.
    #[error("invalid amount on row {row}: {source}")]
    InvalidAmount {
        row: usize,
        #[source]
        source: InputError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a validated request.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CalculationRequest, CsvLoadError> {
    let scheme = Scheme::parse(&row.scheme).ok_or_else(|| CsvLoadError::InvalidScheme {
        scheme: row.scheme.clone(),
        row: row_number,
    })?;

    CalculationRequest::parse(&row.income, row.expenses.as_deref(), scheme).map_err(|source| {
        CsvLoadError::InvalidAmount {
            row: row_number,
            source,
        }
    })
}

/// Parse CSV text and return one request per row, in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid.
/// * [CsvLoadError::InvalidScheme] – if a row names an unknown scheme.
/// * [CsvLoadError::InvalidAmount] – if an amount is missing, non-numeric or negative.
pub fn load_from_str(input: &str) -> Result<Vec<CalculationRequest>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a file from disk and delegate to [load_from_str].
///
/// # Errors
///
/// Fails when the file cannot be read or its contents are invalid.
pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Vec<CalculationRequest>> {
    let contents = std::fs::read_to_string(path)?;
    let requests = load_from_str(&contents)?;
    Ok(requests)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
