use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nomina_config::Config;
use nomina_config::translator::ProviderKind;

#[derive(Parser)]
#[command(
    name = "nomina",
    version,
    about = "Look up country names translated into other languages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a JSON config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Translation provider: fixed or json.
    #[arg(short, long)]
    pub provider: Option<ProviderKind>,

    /// JSON translation table (json provider).
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Tab-delimited country code table.
    #[arg(long)]
    pub country_codes: Option<PathBuf>,

    /// Tab-delimited language code table.
    #[arg(long)]
    pub language_codes: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default).
    Run,
    /// Translate one country name and exit.
    Translate {
        /// Country name or code.
        country: String,
        /// Language name or code.
        language: String,
    },
    /// List countries with translations.
    Countries,
    /// List languages available for a country.
    Languages {
        /// Country name or code.
        country: String,
    },
    /// Print a code table as code and name pairs.
    Codes {
        /// Show the language table instead of the country table.
        #[arg(long)]
        languages: bool,
    },
}

impl Cli {
    /// Command line flags win over the config file and environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(provider) = self.provider {
            config.translator.provider = provider;
        }
        if let Some(path) = &self.translations {
            config.data.translations = Some(path.clone());
        }
        if let Some(path) = &self.country_codes {
            config.data.country_codes = Some(path.clone());
        }
        if let Some(path) = &self.language_codes {
            config.data.language_codes = Some(path.clone());
        }
    }
}
