//! Locale-aware currency formatting.
//!
//! Amounts are rounded to the currency's minor units (half away from zero)
//! and rendered with the locale's separators and symbol placement. A value
//! that rounds to zero never carries a minus sign.

use finboard_shared::DisplayConfig;
use finboard_shared::types::{Currency, Locale, SymbolPlacement};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats amounts for one locale and currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
    currency: Currency,
}

impl CurrencyFormatter {
    /// Creates a formatter for the given locale and currency.
    #[must_use]
    pub const fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    /// Creates a formatter from display configuration.
    #[must_use]
    pub const fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.locale, display.currency)
    }

    /// Locale used for separators and symbol placement.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Currency used when formatting bare amounts.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Formats an amount in the formatter's currency.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        format(amount, self.locale, self.currency)
    }
}

/// Formats `amount` as a currency string.
#[must_use]
pub fn format(amount: Decimal, locale: Locale, currency: Currency) -> String {
    let minor_units = currency.minor_units();
    let rounded =
        amount.round_dp_with_strategy(minor_units, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let body = format_number(rounded.abs(), minor_units, locale);
    let symbol = currency.symbol();
    let spacing = locale
        .symbol_spacing()
        .map(String::from)
        .unwrap_or_default();

    match locale.symbol_placement() {
        SymbolPlacement::Prefix => format!("{sign}{symbol}{spacing}{body}"),
        SymbolPlacement::Suffix => format!("{sign}{body}{spacing}{symbol}"),
    }
}

/// Renders a non-negative value with grouping and a fixed number of decimals.
fn format_number(value: Decimal, decimals: u32, locale: Locale) -> String {
    let precision = decimals as usize;
    let digits = format!("{value:.precision$}");
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = group_digits(int_part, locale.grouping_separator());
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator());
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1234.56), "1\u{202F}234,56\u{A0}€")]
    #[case(dec!(0), "0,00\u{A0}€")]
    #[case(dec!(-1234.5), "-1\u{202F}234,50\u{A0}€")]
    #[case(dec!(1000000), "1\u{202F}000\u{202F}000,00\u{A0}€")]
    #[case(dec!(999.999), "1\u{202F}000,00\u{A0}€")]
    fn test_default_french_euro(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(CurrencyFormatter::default().format(amount), expected);
    }

    #[rstest]
    #[case(Locale::EnUs, Currency::Usd, dec!(1234.56), "$1,234.56")]
    #[case(Locale::EnUs, Currency::Usd, dec!(-42), "-$42.00")]
    #[case(Locale::EnGb, Currency::Gbp, dec!(12.345), "£12.35")]
    #[case(Locale::DeDe, Currency::Eur, dec!(-9876.54), "-9.876,54\u{A0}€")]
    #[case(Locale::IdId, Currency::Idr, dec!(2500000), "Rp\u{A0}2.500.000,00")]
    #[case(Locale::EnUs, Currency::Jpy, dec!(1234.5), "¥1,235")]
    fn test_other_locales(
        #[case] locale: Locale,
        #[case] currency: Currency,
        #[case] amount: Decimal,
        #[case] expected: &str,
    ) {
        assert_eq!(format(amount, locale, currency), expected);
    }

    #[test]
    fn test_negative_that_rounds_to_zero_has_no_sign() {
        assert_eq!(format(dec!(-0.004), Locale::EnUs, Currency::Usd), "$0.00");
    }

    #[test]
    fn test_from_config() {
        let display = DisplayConfig {
            locale: Locale::EnGb,
            currency: Currency::Gbp,
        };
        let formatter = CurrencyFormatter::from_config(&display);
        assert_eq!(formatter.locale(), Locale::EnGb);
        assert_eq!(formatter.currency(), Currency::Gbp);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", ','), "123,456");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }
}
