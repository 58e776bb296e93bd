use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use skladka_cli::app::{self, CompareArgs};
use skladka_cli::report::OutputFormat;
use skladka_core::Scheme;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Health contribution calculator for Polish sole traders.
///
/// Compares the monthly contribution under the current rules and after the
/// 2026 reform, and recommends the cheapest tax-filing scheme.
#[derive(Debug, Parser)]
#[command(name = "skladka", version)]
struct Cli {
    /// TOML file overriding the built-in rate table.
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare a single scenario.
    Compare {
        /// Monthly gross income in PLN (e.g. `10000` or `10 000,50`).
        #[arg(long)]
        income: String,

        /// Monthly deductible expenses in PLN; 0 when omitted.
        #[arg(long)]
        expenses: Option<String>,

        /// Tax-filing scheme: `skala`, `liniowka` or `ryczalt`.
        #[arg(long, default_value = "skala", value_parser = parse_scheme)]
        scheme: Scheme,

        /// Reject incomes that expenses consume completely.
        #[arg(long)]
        strict: bool,
    },

    /// Compare every scenario in a CSV file (`income,expenses,scheme`).
    Batch {
        /// Path to the CSV file.
        path: PathBuf,
    },
}

fn parse_scheme(s: &str) -> Result<Scheme, String> {
    Scheme::parse(s).ok_or_else(|| format!("unknown scheme '{s}' (expected skala, liniowka or ryczalt)"))
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so normal runs only print the report.
/// * Writes to stderr, keeping stdout for the report itself.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let calculator = app::load_calculator(cli.rates.as_deref())?;

    let output = match cli.command {
        Command::Compare {
            income,
            expenses,
            scheme,
            strict,
        } => {
            debug!(scheme = scheme.as_str(), "comparing single scenario");
            let args = CompareArgs {
                income,
                expenses,
                scheme,
                strict,
            };
            let result = app::compare_one(&calculator, &args)?;
            app::render_single(&result, cli.format)?
        }
        Command::Batch { path } => {
            let results = app::compare_batch(&calculator, &path)?;
            app::render_batch(&results, cli.format)?
        }
    };

    println!("{output}");
    Ok(())
}
