//! Locale conventions for number and currency rendering.

use serde::{Deserialize, Serialize};

/// Narrow no-break space, used as the French grouping separator.
const NARROW_NBSP: char = '\u{202F}';
/// No-break space.
const NBSP: char = '\u{00A0}';

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Symbol before the number (`$1.00`).
    Prefix,
    /// Symbol after the number (`1,00 €`).
    Suffix,
}

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// French (France).
    #[default]
    #[serde(rename = "fr-FR")]
    FrFr,
    /// English (United States).
    #[serde(rename = "en-US")]
    EnUs,
    /// English (United Kingdom).
    #[serde(rename = "en-GB")]
    EnGb,
    /// German (Germany).
    #[serde(rename = "de-DE")]
    DeDe,
    /// Indonesian (Indonesia).
    #[serde(rename = "id-ID")]
    IdId,
}

impl Locale {
    /// BCP 47 language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::FrFr => "fr-FR",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
            Self::IdId => "id-ID",
        }
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb => '.',
            Self::FrFr | Self::DeDe | Self::IdId => ',',
        }
    }

    /// Thousands grouping separator.
    #[must_use]
    pub const fn grouping_separator(self) -> char {
        match self {
            Self::FrFr => NARROW_NBSP,
            Self::EnUs | Self::EnGb => ',',
            Self::DeDe | Self::IdId => '.',
        }
    }

    /// Currency symbol placement.
    #[must_use]
    pub const fn symbol_placement(self) -> SymbolPlacement {
        match self {
            Self::FrFr | Self::DeDe => SymbolPlacement::Suffix,
            Self::EnUs | Self::EnGb | Self::IdId => SymbolPlacement::Prefix,
        }
    }

    /// Separator between the symbol and the number, if any.
    #[must_use]
    pub const fn symbol_spacing(self) -> Option<char> {
        match self {
            Self::FrFr | Self::DeDe | Self::IdId => Some(NBSP),
            Self::EnUs | Self::EnGb => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "fr-fr" => Ok(Self::FrFr),
            "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "de-de" => Ok(Self::DeDe),
            "id-id" => Ok(Self::IdId),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("fr-FR", Locale::FrFr)]
    #[case("en_US", Locale::EnUs)]
    #[case("EN-gb", Locale::EnGb)]
    #[case("de-DE", Locale::DeDe)]
    #[case("id-ID", Locale::IdId)]
    fn test_locale_from_str(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(Locale::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(Locale::from_str("xx-YY").is_err());
    }

    #[test]
    fn test_display_round_trips_tag() {
        assert_eq!(Locale::FrFr.to_string(), "fr-FR");
        assert_eq!(Locale::default(), Locale::FrFr);
    }

    #[test]
    fn test_serde_uses_language_tag() {
        let json = serde_json::to_string(&Locale::DeDe).unwrap();
        assert_eq!(json, "\"de-DE\"");
        let parsed: Locale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(parsed, Locale::EnUs);
    }
}
