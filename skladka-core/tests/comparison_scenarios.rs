//! End-to-end scenarios through the public API: raw input is validated,
//! compared and formatted the way a front end would.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use skladka_core::calculations::ContributionCalculator;
use skladka_core::format::{format_percent, format_pln};
use skladka_core::{
    CalculationInput, CalculationRequest, Regime, Scheme, Trend, compare, compute_contribution,
    select_best_future_scheme,
};

#[test]
fn scale_taxpayer_with_expenses() {
    let request = CalculationRequest::parse("10000", Some("3000"), Scheme::ScaleProgressive).unwrap();

    let result = request.compare_with(ContributionCalculator::standard());

    assert_eq!(result.net_income, dec!(7000));
    assert_eq!(format_pln(result.current_amount), "630,00\u{a0}zł");
    assert_eq!(format_pln(result.future_amount), "337,50\u{a0}zł");
    assert_eq!(format_pln(result.difference), "-292,50\u{a0}zł");
    assert_eq!(format_percent(result.percent_change), "-46,43%");
    assert_eq!(result.trend(), Trend::Decrease);
}

#[test]
fn lump_sum_taxpayer_without_expenses() {
    let result = compare(dec!(10000), dec!(0), Scheme::LumpSum);

    assert_eq!(result.current_amount, dec!(769.43));
    assert_eq!(result.future_amount, dec!(337.50));
    assert_eq!(result.best_scheme.schemes, Scheme::ALL.to_vec());
}

#[test]
fn zero_income_yields_floor_amounts() {
    for scheme in Scheme::ALL {
        let result = compare(Decimal::ZERO, Decimal::ZERO, scheme);
        let current_floor = match scheme {
            Scheme::LumpSum => dec!(0),
            _ => dec!(314.96),
        };

        assert_eq!(result.current_amount, current_floor, "{scheme:?}");
        assert_eq!(result.future_amount, dec!(337.50), "{scheme:?}");
        assert_eq!(result.difference, dec!(337.50) - current_floor, "{scheme:?}");
    }
}

#[test]
fn percent_change_never_divides_by_zero() {
    let result = compare(Decimal::ZERO, dec!(500), Scheme::LumpSum);

    assert_eq!(result.current_amount, Decimal::ZERO);
    assert_eq!(result.percent_change, Decimal::ZERO);
}

#[test]
fn best_scheme_keeps_every_tied_scheme() {
    let best = select_best_future_scheme(dec!(39800), dec!(16900));

    assert!(best.is_tie());
    assert!(best.contains(Scheme::ScaleProgressive));
    assert!(best.contains(Scheme::FlatLinear));
    assert!(best.contains(Scheme::LumpSum));
}

#[test]
fn best_scheme_amount_matches_single_computation() {
    let best = select_best_future_scheme(dec!(55000), dec!(12000));

    for scheme in &best.schemes {
        let expenses = if scheme.deducts_expenses() { dec!(12000) } else { dec!(0) };
        let amount = compute_contribution(&CalculationInput::new(dec!(55000), expenses, *scheme, Regime::Future));

        assert_eq!(amount, best.amount);
    }
}

#[test]
fn invalid_input_never_reaches_calculator() {
    assert!(CalculationRequest::parse("", None, Scheme::FlatLinear).is_err());
    assert!(CalculationRequest::parse("dziesięć", None, Scheme::FlatLinear).is_err());
    assert!(CalculationRequest::parse("1000", Some("-5"), Scheme::FlatLinear).is_err());
}

#[test]
fn comparison_serializes_with_scheme_codes() {
    let result = compare(dec!(30000), dec!(0), Scheme::FlatLinear);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["scheme"], "liniowka");
    assert_eq!(json["best_scheme"]["schemes"][0], "ryczalt");
}

#[test]
fn largest_accepted_income_compares_for_every_scheme() {
    let request = CalculationRequest::parse("79228162514264337593543950335", Some("0"), Scheme::ScaleProgressive).unwrap();
    assert_eq!(request.income, Decimal::MAX);

    for scheme in Scheme::ALL {
        let result = compare(Decimal::MAX, Decimal::ZERO, scheme);

        assert!(result.future_amount > Decimal::ZERO, "{scheme:?}");
        assert_eq!(result.best_scheme.schemes, vec![Scheme::LumpSum], "{scheme:?}");
    }

    let scale = compare(Decimal::MAX, Decimal::ZERO, Scheme::ScaleProgressive);
    assert_eq!(scale.trend(), Trend::Decrease);
    assert!(scale.percent_change < Decimal::ZERO);
}

#[test]
fn huge_lump_sum_income_reports_large_percent_change() {
    let request = CalculationRequest::parse("30000000000000000000000000000", None, Scheme::LumpSum).unwrap();

    let result = request.compare_with(ContributionCalculator::standard());

    assert_eq!(result.current_amount, dec!(1384.97));
    assert_eq!(result.trend(), Trend::Increase);
    assert!(result.percent_change > dec!(1000000));
}
