pub mod fixed;
pub mod json;
pub mod loader;

pub use fixed::FixedTranslator;
pub use json::{COUNTRY_CODE_FIELD, DEFAULT_IGNORED_FIELDS, JsonTranslator};
pub use loader::TranslatorLoader;

pub type CountryCode = String;
pub type LanguageCode = String;

/// Country-name translation provider interface
///
/// Codes are matched case-insensitively. A country or language the provider
/// does not know is a normal miss, never an error.
pub trait Translator: Send + Sync {
    /// Country codes this provider has translations for, in data order
    fn countries(&self) -> Vec<CountryCode>;

    /// Language codes available for `country`, empty if the country is unknown
    fn languages(&self, country: &str) -> Vec<LanguageCode>;

    /// Name of `country` in `language`, or `None` when either is unknown
    fn translate(&self, country: &str, language: &str) -> Option<String>;

    /// Provider label
    fn name(&self) -> &str;
}
