use nomina_core::code_key;

use crate::{CountryCode, LanguageCode, Translator};

pub const CANADA: &str = "can";
pub const FRANCE: &str = "fra";

pub const GERMAN: &str = "de";
pub const ENGLISH: &str = "en";
pub const CHINESE: &str = "zh";
pub const SPANISH: &str = "es";
pub const FRENCH: &str = "fr";

const COUNTRIES: [&str; 2] = [CANADA, FRANCE];
const LANGUAGES: [&str; 5] = [GERMAN, ENGLISH, CHINESE, SPANISH, FRENCH];

/// Hardcoded two-country table. Needs no data files, so it is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTranslator;

impl FixedTranslator {
    pub fn new() -> Self {
        Self
    }

    fn canada(language: &str) -> Option<&'static str> {
        match language {
            GERMAN => Some("Kanada"),
            ENGLISH | FRENCH => Some("Canada"),
            CHINESE => Some("加拿大"),
            SPANISH => Some("Canadá"),
            _ => None,
        }
    }

    fn france(language: &str) -> Option<&'static str> {
        match language {
            GERMAN => Some("Frankreich"),
            ENGLISH | FRENCH => Some("France"),
            CHINESE => Some("法国"),
            SPANISH => Some("Francia"),
            _ => None,
        }
    }
}

impl Translator for FixedTranslator {
    fn countries(&self) -> Vec<CountryCode> {
        COUNTRIES.iter().map(|c| c.to_string()).collect()
    }

    fn languages(&self, country: &str) -> Vec<LanguageCode> {
        let country = code_key(country);
        if COUNTRIES.contains(&country.as_str()) {
            LANGUAGES.iter().map(|l| l.to_string()).collect()
        } else {
            Vec::new()
        }
    }

    fn translate(&self, country: &str, language: &str) -> Option<String> {
        let language = code_key(language);

        let translation = match code_key(country).as_str() {
            CANADA => Self::canada(&language),
            FRANCE => Self::france(&language),
            _ => None,
        };

        tracing::debug!(country, %language, found = translation.is_some(), "fixed lookup");
        translation.map(str::to_string)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canada() {
        let t = FixedTranslator::new();
        assert_eq!(t.translate("can", "de").as_deref(), Some("Kanada"));
        assert_eq!(t.translate("can", "fr").as_deref(), Some("Canada"));
        assert_eq!(t.translate("can", "en").as_deref(), Some("Canada"));
        assert_eq!(t.translate("can", "zh").as_deref(), Some("加拿大"));
        assert_eq!(t.translate("can", "es").as_deref(), Some("Canadá"));
    }

    #[test]
    fn test_france() {
        let t = FixedTranslator::new();
        assert_eq!(t.translate("fra", "de").as_deref(), Some("Frankreich"));
        assert_eq!(t.translate("fra", "en").as_deref(), Some("France"));
        assert_eq!(t.translate("fra", "zh").as_deref(), Some("法国"));
        assert_eq!(t.translate("fra", "es").as_deref(), Some("Francia"));
    }

    #[test]
    fn test_unknown_language_or_country() {
        let t = FixedTranslator::new();
        assert_eq!(t.translate("can", "xx"), None);
        assert_eq!(t.translate("mex", "en"), None);
        assert_eq!(t.translate("", ""), None);
    }

    #[test]
    fn test_case_insensitive() {
        let t = FixedTranslator::new();
        let expected = t.translate("can", "es");
        assert_eq!(t.translate("CAN", "ES"), expected);
        assert_eq!(t.translate("Can", "Es"), expected);
    }

    #[test]
    fn test_listings() {
        let t = FixedTranslator::new();
        assert_eq!(t.countries(), ["can", "fra"]);
        assert_eq!(t.languages("can"), ["de", "en", "zh", "es", "fr"]);
        assert_eq!(t.languages("FRA"), ["de", "en", "zh", "es", "fr"]);
        assert!(t.languages("mex").is_empty());
    }

    #[test]
    fn test_listings_are_copies() {
        let t = FixedTranslator::new();
        let mut countries = t.countries();
        countries.clear();
        let mut languages = t.languages("can");
        languages.push("xx".to_string());

        assert_eq!(t.countries().len(), 2);
        assert_eq!(t.languages("can").len(), 5);
        assert_eq!(t.translate("can", "xx"), None);
    }
}
