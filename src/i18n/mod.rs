//! Supported site locales

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a locale code is not one of the supported locales
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale: {0} (supported: en, vi, zh)")]
pub struct UnknownLocale(pub String);

/// A site language. Every post belongs to exactly one locale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Vietnamese
    Vi,
    /// Chinese
    Zh,
}

impl Locale {
    /// Every supported locale, in stable order
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Vi, Locale::Zh];

    /// Canonical locale code
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
            Locale::Zh => "zh",
        }
    }

    /// Human readable language name
    pub const fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Vi => "Tiếng Việt",
            Locale::Zh => "中文",
        }
    }

    /// Parse a locale code. Case-insensitive; region tags such as `vi-VN`
    /// resolve to their language.
    pub fn parse(value: &str) -> Result<Self, UnknownLocale> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Ok(Locale::En),
            "vi" => Ok(Locale::Vi),
            "zh" => Ok(Locale::Zh),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!(Locale::parse("en").unwrap(), Locale::En);
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::parse("VI").unwrap(), Locale::Vi);
        assert_eq!(Locale::parse("vi-VN").unwrap(), Locale::Vi);
        assert_eq!(Locale::parse("zh_CN").unwrap(), Locale::Zh);
        assert_eq!(
            Locale::parse("fr"),
            Err(UnknownLocale("fr".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let yaml = serde_yaml::to_string(&Locale::Vi).unwrap();
        assert_eq!(yaml.trim(), "vi");
        let locale: Locale = serde_yaml::from_str("zh").unwrap();
        assert_eq!(locale, Locale::Zh);
    }
}
