use nomina_config::Config;
use nomina_config::prompt::{CodeCase, PromptConfig};
use nomina_config::translator::ProviderKind;
use nomina_core::{CodeConverter, LoadError, code_key};
use nomina_translator::{FixedTranslator, Translator, TranslatorLoader};

/// A user choice matched against a code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Provider-side key (lowercase)
    pub code: String,
    /// Display name from the code table
    pub name: String,
}

/// Everything a session needs, loaded once at startup
pub struct AppState {
    pub countries: CodeConverter,
    pub languages: CodeConverter,
    pub translator: Box<dyn Translator>,
    pub prompt: PromptConfig,
}

impl AppState {
    pub fn new(
        countries: CodeConverter,
        languages: CodeConverter,
        translator: Box<dyn Translator>,
        prompt: PromptConfig,
    ) -> Self {
        Self {
            countries,
            languages,
            translator,
            prompt,
        }
    }

    /// Load code tables and the configured provider. Any load failure aborts.
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        let countries = match &config.data.country_codes {
            Some(path) => CodeConverter::from_file(path)?,
            None => CodeConverter::embedded_countries(),
        };
        let languages = match &config.data.language_codes {
            Some(path) => CodeConverter::from_file(path)?,
            None => CodeConverter::embedded_languages(),
        };

        let translator: Box<dyn Translator> = match config.translator.provider {
            ProviderKind::Fixed => {
                if config.data.translations.is_some() {
                    tracing::warn!("Translation table path is ignored by the fixed provider");
                }
                Box::new(FixedTranslator::new())
            }
            ProviderKind::Json => match &config.data.translations {
                Some(path) => Box::new(TranslatorLoader::load_from_file_ignoring(
                    path,
                    config.translator.ignored_fields.as_slice(),
                )?),
                None => Box::new(TranslatorLoader::load_embedded()?),
            },
        };
        tracing::info!("Using {} translation provider", translator.name());

        Ok(Self::new(countries, languages, translator, config.prompt.clone()))
    }

    pub fn is_quit(&self, input: &str) -> bool {
        input.to_lowercase() == self.prompt.quit_command.to_lowercase()
    }

    /// Display names of the provider's countries, sorted. Codes missing from
    /// the country table are left out.
    pub fn country_names(&self) -> Vec<String> {
        let case = self.prompt.country_code_case;
        let mut names: Vec<String> = self
            .translator
            .countries()
            .iter()
            .filter_map(|code| self.countries.from_code(&case.apply(code)))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Display names of the languages available for `country`, sorted
    pub fn language_names(&self, country: &str) -> Vec<String> {
        let case = self.prompt.language_code_case;
        let mut names: Vec<String> = self
            .translator
            .languages(country)
            .iter()
            .filter_map(|code| self.languages.from_code(&case.apply(code)))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Match a country by display name, or by code as a fallback
    pub fn resolve_country(&self, input: &str) -> Option<Resolved> {
        resolve(&self.countries, self.prompt.country_code_case, input)
    }

    /// Match a language by display name, or by code as a fallback
    pub fn resolve_language(&self, input: &str) -> Option<Resolved> {
        resolve(&self.languages, self.prompt.language_code_case, input)
    }

    pub fn translate(&self, country: &Resolved, language: &Resolved) -> Option<String> {
        self.translator.translate(&country.code, &language.code)
    }
}

fn resolve(table: &CodeConverter, case: CodeCase, input: &str) -> Option<Resolved> {
    if let Some(code) = table.from_name(input) {
        return Some(Resolved {
            code: code_key(code),
            name: input.to_string(),
        });
    }

    let name = table.from_code(&case.apply(input))?;
    Some(Resolved {
        code: code_key(input),
        name: name.to_string(),
    })
}
