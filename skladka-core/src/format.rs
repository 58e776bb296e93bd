//! Polish (`pl-PL`) presentation of amounts.
//!
//! Output matches what Polish locale formatters produce: a comma as the
//! decimal separator, a no-break space between thousands groups (only once
//! the integer part reaches five digits) and `zł` after the amount.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

const NBSP: char = '\u{a0}';

/// Integer parts shorter than this are not grouped (`1384,97`, not `1 384,97`).
const MIN_GROUPED_DIGITS: usize = 5;

/// Formats `value` with two decimals in the `pl-PL` style, without a currency.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::format::format_number;
///
/// assert_eq!(format_number(dec!(12900)), "12\u{a0}900,00");
/// assert_eq!(format_number(dec!(-46.428)), "-46,43");
/// ```
pub fn format_number(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut out = String::with_capacity(text.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    out.push(',');
    out.push_str(fraction);
    out
}

/// Formats `value` as a PLN amount, e.g. `1384,97 zł`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::format::format_pln;
///
/// assert_eq!(format_pln(dec!(337.5)), "337,50\u{a0}zł");
/// ```
pub fn format_pln(value: Decimal) -> String {
    format!("{}{NBSP}zł", format_number(value))
}

/// Formats a percentage with two decimals and an explicit sign for increases.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::format::format_percent;
///
/// assert_eq!(format_percent(dec!(7.156)), "+7,16%");
/// assert_eq!(format_percent(dec!(-46.428)), "-46,43%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    let sign = if round_half_up(value) > Decimal::ZERO { "+" } else { "" };
    format!("{sign}{}%", format_number(value))
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(c);
    }
    out
}
