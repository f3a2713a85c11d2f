use std::collections::HashMap;

use nomina_core::{LoadError, code_key};
use serde_json::{Map, Value};

use crate::{CountryCode, LanguageCode, Translator};

/// Record field holding the alpha-3 country code.
pub const COUNTRY_CODE_FIELD: &str = "alpha3";

/// Record fields that are identifiers, not language codes.
pub const DEFAULT_IGNORED_FIELDS: &[&str] = &["id", "alpha2", COUNTRY_CODE_FIELD];

/// Translations of one country, languages kept in record order
#[derive(Debug, Clone, Default)]
struct CountryTranslations {
    languages: Vec<LanguageCode>,
    names: HashMap<LanguageCode, String>,
}

impl CountryTranslations {
    fn insert(&mut self, language: LanguageCode, name: String) {
        if self.names.insert(language.clone(), name).is_none() {
            self.languages.push(language);
        }
    }
}

/// Translation table parsed from a JSON array of per-country records:
///
/// ```json
/// [{"id": 124, "alpha2": "ca", "alpha3": "can", "de": "Kanada", "es": "Canadá"}]
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonTranslator {
    translations: HashMap<CountryCode, CountryTranslations>,
    countries: Vec<CountryCode>,
    languages: Vec<LanguageCode>,
}

impl JsonTranslator {
    /// Parse with [`DEFAULT_IGNORED_FIELDS`].
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_json_ignoring(json, DEFAULT_IGNORED_FIELDS)
    }

    /// Parse, treating every field except `ignored` (and the country code
    /// field itself) as a language code.
    pub fn from_json_ignoring<S: AsRef<str>>(json: &str, ignored: &[S]) -> Result<Self, LoadError> {
        let data: Value = serde_json::from_str(json)?;
        let records = data.as_array().ok_or_else(|| {
            LoadError::InvalidFormat("translation table must be a JSON array".to_string())
        })?;

        let is_ignored =
            |key: &str| key == COUNTRY_CODE_FIELD || ignored.iter().any(|f| f.as_ref() == key);

        let mut translator = Self::default();

        for (index, record) in records.iter().enumerate() {
            let record = record.as_object().ok_or_else(|| {
                LoadError::InvalidFormat(format!("record {index} is not an object"))
            })?;

            let country = code_key(country_code(record, index)?);
            let mut entry = CountryTranslations::default();

            for (key, value) in record {
                if is_ignored(key.as_str()) {
                    continue;
                }

                let name = value.as_str().ok_or_else(|| {
                    LoadError::InvalidFormat(format!(
                        "record {index} ({country}): translation for '{key}' is not a string"
                    ))
                })?;

                let language = code_key(key);
                if !translator.languages.contains(&language) {
                    translator.languages.push(language.clone());
                }
                entry.insert(language, name.to_string());
            }

            if translator.translations.insert(country.clone(), entry).is_some() {
                tracing::warn!("Duplicate translation record for '{country}', keeping the last one");
            } else {
                translator.countries.push(country);
            }
        }

        Ok(translator)
    }

    /// Every language code seen in any record, first-seen order.
    pub fn all_languages(&self) -> Vec<LanguageCode> {
        self.languages.clone()
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

fn country_code(record: &Map<String, Value>, index: usize) -> Result<&str, LoadError> {
    match record.get(COUNTRY_CODE_FIELD) {
        Some(Value::String(code)) => Ok(code.as_str()),
        Some(_) => Err(LoadError::InvalidFormat(format!(
            "record {index}: '{COUNTRY_CODE_FIELD}' is not a string"
        ))),
        None => Err(LoadError::InvalidFormat(format!(
            "record {index}: missing '{COUNTRY_CODE_FIELD}'"
        ))),
    }
}

impl Translator for JsonTranslator {
    fn countries(&self) -> Vec<CountryCode> {
        self.countries.clone()
    }

    fn languages(&self, country: &str) -> Vec<LanguageCode> {
        self.translations
            .get(&code_key(country))
            .map(|entry| entry.languages.clone())
            .unwrap_or_default()
    }

    fn translate(&self, country: &str, language: &str) -> Option<String> {
        let translation = self
            .translations
            .get(&code_key(country))
            .and_then(|entry| entry.names.get(&code_key(language)))
            .cloned();

        tracing::debug!(country, language, found = translation.is_some(), "json lookup");
        translation
    }

    fn name(&self) -> &str {
        "json"
    }
}
