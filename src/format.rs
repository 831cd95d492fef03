//! Fixed Brazilian-style number and date formatting.
//!
//! Comma decimal separator, no thousands grouping, two decimals for money,
//! `DD/MM/YYYY` dates. Nothing here reads the process locale.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for a missing date.
pub const MISSING_DATE: &str = "N/A";

/// `1234.5` → `"1234,50"`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(2);
    rounded.to_string().replace('.', ",")
}

/// `1234.5` → `"R$ 1234,50"`.
pub fn format_currency(value: Decimal) -> String {
    format!("R$ {}", format_amount(value))
}

/// Whole quantities print without decimals (`3`), others with two (`2,50`).
pub fn format_quantity(value: Decimal) -> String {
    if value.fract().is_zero() {
        let mut whole = value.trunc();
        if whole.is_zero() {
            whole.set_sign_positive(true);
        }
        whole.normalize().to_string()
    } else {
        format_amount(value)
    }
}

/// `2024-03-07` → `"07/03/2024"`, absent → `"N/A"`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => MISSING_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn currency_uses_comma_and_two_places() {
        assert_eq!(format_currency(dec("1234.5")), "R$ 1234,50");
        assert_eq!(format_currency(dec("800")), "R$ 800,00");
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_currency(dec("1234567.891")), "R$ 1234567,89");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(format_amount(dec("0.125")), "0,13");
        assert_eq!(format_amount(dec("2.675")), "2,68");
        assert_eq!(format_amount(dec("-0.125")), "-0,13");
        assert_eq!(format_amount(dec("-0.001")), "0,00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_amount(dec("-5")), "-5,00");
    }

    #[test]
    fn quantities() {
        assert_eq!(format_quantity(dec("3")), "3");
        assert_eq!(format_quantity(dec("3.00")), "3");
        assert_eq!(format_quantity(dec("2.5")), "2,50");
        assert_eq!(format_quantity(dec("0.333")), "0,33");
        assert_eq!(format_quantity(dec("1000000")), "1000000");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 7)), "07/03/2024");
        assert_eq!(format_date(None), "N/A");
    }
}
