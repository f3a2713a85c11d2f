use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Hardcoded two-country table
    #[default]
    Fixed,
    /// Table parsed from a JSON file
    Json,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(ProviderKind::Fixed),
            "json" => Ok(ProviderKind::Json),
            other => Err(format!("unknown provider '{other}' (expected fixed or json)")),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Fixed => f.write_str("fixed"),
            ProviderKind::Json => f.write_str("json"),
        }
    }
}

fn default_ignored_fields() -> Vec<String> {
    vec!["id".to_string(), "alpha2".to_string(), "alpha3".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub provider: ProviderKind,
    /// JSON record fields that are identifiers rather than language codes
    #[serde(default = "default_ignored_fields")]
    pub ignored_fields: Vec<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            ignored_fields: default_ignored_fields(),
        }
    }
}
