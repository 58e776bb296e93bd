//! Text and JSON rendering of comparison results.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use skladka_core::calculations::common::round_half_up;
use skladka_core::format::{format_number, format_percent, format_pln};
use skladka_core::{ComparisonResult, Regime, Scheme, Trend};

/// Output style selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 16;

fn row(
    out: &mut String,
    label: &str,
    current: &str,
    future: &str,
) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{current:>VALUE_WIDTH$}{future:>VALUE_WIDTH$}");
}

fn join_labels(schemes: &[Scheme]) -> String {
    schemes
        .iter()
        .map(Scheme::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line summary of how the contribution changes.
pub fn trend_sentence(result: &ComparisonResult) -> String {
    match result.trend() {
        Trend::Increase => format!(
            "Składka zdrowotna wzrośnie o {} miesięcznie ({}%).",
            format_pln(result.difference),
            format_number(result.percent_change)
        ),
        Trend::Decrease => format!(
            "Składka zdrowotna zmniejszy się o {} miesięcznie ({}%).",
            format_pln(result.difference.abs()),
            format_number(result.percent_change.abs())
        ),
        Trend::Unchanged => "Składka zdrowotna nie zmieni się.".to_string(),
    }
}

/// Recommendation paragraph. Ties list every equally cheap scheme.
pub fn recommendation(result: &ComparisonResult) -> String {
    let best = &result.best_scheme;
    let mut out = String::new();

    if result.is_scheme_optimal() {
        let _ = writeln!(out, "Aktualna forma opodatkowania jest optymalna.");
        if best.is_tie() {
            let _ = writeln!(
                out,
                "Równie korzystne od 2026: {} ({}).",
                join_labels(&best.schemes),
                format_pln(best.amount)
            );
        }
        return out;
    }

    let _ = writeln!(out, "Zalecana zmiana formy opodatkowania.");
    if best.is_tie() {
        let _ = writeln!(
            out,
            "Równie korzystne formy od 2026: {}",
            join_labels(&best.schemes)
        );
    } else {
        let _ = writeln!(
            out,
            "Najkorzystniejsza forma opodatkowania od 2026: {}",
            join_labels(&best.schemes)
        );
    }
    let _ = writeln!(out, "Składka zdrowotna po zmianie: {}", format_pln(best.amount));
    let _ = writeln!(
        out,
        "Możesz zaoszczędzić: {} miesięcznie",
        format_pln(result.potential_savings())
    );
    out
}

/// Full comparison table followed by the recommendation.
pub fn render_comparison(result: &ComparisonResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Forma opodatkowania: {}", result.scheme.label());
    let _ = writeln!(out);
    row(
        &mut out,
        "Parametr",
        Regime::Current.label(),
        Regime::Future.label(),
    );
    let income = format_pln(result.income);
    row(&mut out, "Miesięczny przychód", &income, &income);
    let expenses = format_pln(result.expenses);
    row(&mut out, "Miesięczne koszty", &expenses, &expenses);
    let net_income = format_pln(result.net_income);
    row(&mut out, "Dochód", &net_income, &net_income);
    row(
        &mut out,
        "Składka zdrowotna",
        &format_pln(result.current_amount),
        &format_pln(result.future_amount),
    );
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}{} ({})",
        "Różnica",
        if round_half_up(result.difference) > Decimal::ZERO { "+" } else { "" },
        format_pln(result.difference),
        format_percent(result.percent_change)
    );

    if result.scheme == Scheme::LumpSum && result.expenses > Decimal::ZERO {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Uwaga: przy ryczałcie koszty nie wpływają na składkę; \
             są uwzględnione tylko przy porównaniu form na 2026."
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", trend_sentence(result));
    let _ = writeln!(out);
    let _ = writeln!(out, "Porównanie składek zdrowotnych od 2026:");
    for entry in &result.future_by_scheme {
        let marker = if result.best_scheme.contains(entry.scheme) { " *" } else { "" };
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{marker}",
            entry.scheme.label(),
            format_pln(entry.amount)
        );
    }
    let _ = writeln!(out);
    out.push_str(&recommendation(result));
    out
}

/// Single line used when comparing a batch of scenarios.
pub fn render_summary_line(
    row_number: usize,
    result: &ComparisonResult,
) -> String {
    format!(
        "{row_number:>3}. {:<16} {:>14} -> {:>14} ({:>8})  najlepsza: {}",
        result.scheme.as_str(),
        format_pln(result.current_amount),
        format_pln(result.future_amount),
        format_percent(result.percent_change),
        result
            .best_scheme
            .schemes
            .iter()
            .map(Scheme::as_str)
            .collect::<Vec<_>>()
            .join("/")
    )
}

/// JSON document for one comparison, with amounts as decimal strings.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ComparisonResult,
    trend: Trend,
    is_scheme_optimal: bool,
    potential_savings: Decimal,
}

/// Serializes results for machine consumers.
///
/// # Errors
///
/// Fails only if serialization itself fails.
pub fn render_json(results: &[ComparisonResult]) -> serde_json::Result<String> {
    let reports: Vec<JsonReport<'_>> = results
        .iter()
        .map(|result| JsonReport {
            result,
            trend: result.trend(),
            is_scheme_optimal: result.is_scheme_optimal(),
            potential_savings: result.potential_savings(),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use skladka_core::compare;

    #[test]
    fn trend_sentence_for_decrease_uses_absolute_values() {
        let result = compare(dec!(10000), dec!(3000), Scheme::ScaleProgressive);

        assert_eq!(
            trend_sentence(&result),
            "Składka zdrowotna zmniejszy się o 292,50\u{a0}zł miesięcznie (46,43%)."
        );
    }

    #[test]
    fn trend_sentence_for_increase() {
        let result = compare(dec!(0), dec!(0), Scheme::LumpSum);

        assert_eq!(
            trend_sentence(&result),
            "Składka zdrowotna wzrośnie o 337,50\u{a0}zł miesięcznie (0,00%)."
        );
    }

    #[test]
    fn recommendation_lists_every_tied_scheme() {
        let result = compare(dec!(30000), dec!(16000), Scheme::LumpSum);

        let text = recommendation(&result);

        assert!(text.starts_with("Zalecana zmiana formy opodatkowania."));
        assert!(text.contains("Równie korzystne formy od 2026: Skala podatkowa, Podatek liniowy"));
        assert!(text.contains("Możesz zaoszczędzić: 93,10\u{a0}zł miesięcznie"));
    }

    #[test]
    fn recommendation_confirms_optimal_scheme() {
        let result = compare(dec!(30000), dec!(0), Scheme::LumpSum);

        assert_eq!(recommendation(&result), "Aktualna forma opodatkowania jest optymalna.\n");
    }

    #[test]
    fn recommendation_mentions_ties_with_optimal_scheme() {
        let result = compare(dec!(10000), dec!(0), Scheme::FlatLinear);

        let text = recommendation(&result);

        assert!(text.contains("jest optymalna"));
        assert!(text.contains("Równie korzystne od 2026: Skala podatkowa, Podatek liniowy, Ryczałt"));
    }

    #[test]
    fn render_comparison_includes_table_rows() {
        let result = compare(dec!(10000), dec!(3000), Scheme::ScaleProgressive);

        let text = render_comparison(&result);

        assert!(text.contains("Forma opodatkowania: Skala podatkowa"));
        assert!(text.contains("630,00\u{a0}zł"));
        assert!(text.contains("-292,50\u{a0}zł (-46,43%)"));
        assert!(!text.contains("Uwaga"));
    }

    fn difference_line(text: &str) -> &str {
        text.lines().find(|line| line.starts_with("Różnica")).unwrap()
    }

    #[test]
    fn render_comparison_signs_positive_difference() {
        let result = compare(dec!(0), dec!(0), Scheme::ScaleProgressive);

        assert!(difference_line(&render_comparison(&result)).contains("+22,54\u{a0}zł"));
    }

    #[test]
    fn render_comparison_omits_sign_when_difference_rounds_to_zero() {
        let mut result = compare(dec!(10000), dec!(3000), Scheme::ScaleProgressive);
        result.difference = dec!(0.001);

        let text = render_comparison(&result);
        let line = difference_line(&text);

        assert!(line.contains("0,00\u{a0}zł"));
        assert!(!line.contains('+'));
    }

    #[test]
    fn render_comparison_warns_about_lump_sum_expenses() {
        let result = compare(dec!(10000), dec!(2000), Scheme::LumpSum);

        assert!(render_comparison(&result).contains("Uwaga: przy ryczałcie"));
    }

    #[test]
    fn render_comparison_marks_best_schemes() {
        let result = compare(dec!(30000), dec!(0), Scheme::ScaleProgressive);

        let text = render_comparison(&result);

        assert!(text.contains("484,50\u{a0}zł *"));
        assert!(!text.contains("1175,40\u{a0}zł *"));
    }

    #[test]
    fn render_summary_line_joins_tied_codes() {
        let result = compare(dec!(10000), dec!(0), Scheme::LumpSum);

        let line = render_summary_line(1, &result);

        assert!(line.starts_with("  1. ryczalt"));
        assert!(line.ends_with("najlepsza: skala/liniowka/ryczalt"));
    }

    #[test]
    fn render_json_flattens_result() {
        let result = compare(dec!(10000), dec!(3000), Scheme::ScaleProgressive);

        let json = render_json(&[result]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["scheme"], "skala");
        assert_eq!(value[0]["trend"], "decrease");
        assert_eq!(value[0]["is_scheme_optimal"], true);
        assert_eq!(value[0]["current_amount"], "630.00");
    }
}
