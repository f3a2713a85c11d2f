use std::path::Path;

use nomina_core::LoadError;
use nomina_core::error::read_resource;

use crate::json::{DEFAULT_IGNORED_FIELDS, JsonTranslator};

pub struct TranslatorLoader;

impl TranslatorLoader {
    /// Load the bundled translation table
    pub fn load_embedded() -> Result<JsonTranslator, LoadError> {
        let json = include_str!("../../../data/sample.json");
        tracing::info!("Loading embedded translation table...");
        let translator = JsonTranslator::from_json(json)?;
        Self::log_loaded(&translator, "embedded table");
        Ok(translator)
    }

    /// Load a translation table from file path
    pub fn load_from_file(path: &Path) -> Result<JsonTranslator, LoadError> {
        Self::load_from_file_ignoring(path, DEFAULT_IGNORED_FIELDS)
    }

    /// Load from file path with a custom set of non-language fields
    pub fn load_from_file_ignoring<S: AsRef<str>>(
        path: &Path,
        ignored: &[S],
    ) -> Result<JsonTranslator, LoadError> {
        tracing::info!("Loading translation table from file: {}", path.display());
        let json = read_resource(path)?;
        let translator = JsonTranslator::from_json_ignoring(&json, ignored)?;
        Self::log_loaded(&translator, &path.display().to_string());
        Ok(translator)
    }

    fn log_loaded(translator: &JsonTranslator, source: &str) {
        tracing::info!(
            "Loaded {} countries in {} languages from {}",
            translator.country_count(),
            translator.all_languages().len(),
            source
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translator;

    #[test]
    fn test_load_embedded() {
        let t = TranslatorLoader::load_embedded().unwrap();
        assert_eq!(t.translate("can", "es").as_deref(), Some("Canadá"));
        assert_eq!(t.translate("can", "de").as_deref(), Some("Kanada"));
        assert_eq!(t.translate("deu", "fr").as_deref(), Some("Allemagne"));
        assert_eq!(t.countries().first().map(String::as_str), Some("can"));
        assert!(!t.all_languages().contains(&"alpha2".to_string()));
    }

    #[test]
    fn test_embedded_sparse_country() {
        let t = TranslatorLoader::load_embedded().unwrap();
        assert_eq!(t.languages("isl"), ["de", "en", "fr", "no", "sv"]);
        assert_eq!(t.translate("isl", "es"), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"[{"id": 1, "alpha2": "ca", "alpha3": "can", "es": "Canadá"}]"#)
            .unwrap();

        let t = TranslatorLoader::load_from_file(&path).unwrap();
        assert_eq!(t.countries(), ["can"]);
        assert_eq!(t.translate("CAN", "ES").as_deref(), Some("Canadá"));
    }

    #[test]
    fn test_load_from_file_ignoring() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"[{"iso": "CA", "alpha3": "can", "es": "Canadá"}]"#).unwrap();

        let t = TranslatorLoader::load_from_file_ignoring(&path, &["iso".to_string()]).unwrap();
        assert_eq!(t.languages("can"), ["es"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = TranslatorLoader::load_from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let result = TranslatorLoader::load_from_file(&path);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_empty_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        let t = TranslatorLoader::load_from_file(&path).unwrap();
        assert!(t.countries().is_empty());
    }
}
