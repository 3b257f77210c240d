//! Display Formatting
//!
//! en-US renderings of money and plain numbers so every view shows the same
//! derived figures the same way.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Render an amount as USD currency text, e.g. `2000000` → `"$2,000,000.00"`.
///
/// Rounds half away from zero to whole cents. Negative amounts render as
/// `"-$1,234.00"`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    let abs = rounded.abs();
    let whole = abs.trunc();
    let cents = ((abs - whole) * dec!(100)).to_u32().unwrap_or(0);

    format!("{sign}${}.{cents:02}", group_thousands(&integer_digits(whole)))
}

/// Render a number with thousands separators and up to three fraction
/// digits, e.g. `1234567.5` → `"1,234,567.5"`.
pub fn format_number(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    let abs = rounded.abs();
    let whole = abs.trunc();
    let grouped = group_thousands(&integer_digits(whole));

    let fraction = (abs - whole).normalize();
    if fraction.is_zero() {
        format!("{sign}{grouped}")
    } else {
        // "0.125" -> ".125"
        let digits = fraction.to_string();
        format!("{sign}{grouped}{}", digits.trim_start_matches('0'))
    }
}

fn integer_digits(whole: Decimal) -> String {
    whole.to_u128().map_or_else(|| whole.normalize().to_string(), |n| n.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(2000000)), "$2,000,000.00");
        assert_eq!(format_currency(dec!(75000)), "$75,000.00");
        assert_eq!(format_currency(dec!(7211.538461)), "$7,211.54");
        assert_eq!(format_currency(dec!(999.995)), "$1,000.00");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(12.3)), "$12.30");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-5000)), "-$5,000.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(dec!(1234567.5)), "1,234,567.5");
        assert_eq!(format_number(dec!(1000)), "1,000");
        assert_eq!(format_number(dec!(3.14159)), "3.142");
        assert_eq!(format_number(dec!(999)), "999");
        assert_eq!(format_number(dec!(-42000.10)), "-42,000.1");
    }
}
