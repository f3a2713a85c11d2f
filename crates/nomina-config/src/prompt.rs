use serde::{Deserialize, Serialize};

/// How a provider code is cased before it is looked up in a code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeCase {
    Upper,
    Lower,
    Keep,
}

impl CodeCase {
    pub fn apply(self, code: &str) -> String {
        match self {
            CodeCase::Upper => code.to_uppercase(),
            CodeCase::Lower => code.to_lowercase(),
            CodeCase::Keep => code.to_string(),
        }
    }
}

fn default_quit_command() -> String {
    "quit".to_string()
}

fn default_country_case() -> CodeCase {
    CodeCase::Upper
}

fn default_language_case() -> CodeCase {
    CodeCase::Lower
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Typed at any prompt to end the session, matched case-insensitively
    #[serde(default = "default_quit_command")]
    pub quit_command: String,
    #[serde(default = "default_country_case")]
    pub country_code_case: CodeCase,
    #[serde(default = "default_language_case")]
    pub language_code_case: CodeCase,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            quit_command: default_quit_command(),
            country_code_case: default_country_case(),
            language_code_case: default_language_case(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_case() {
        assert_eq!(CodeCase::Upper.apply("can"), "CAN");
        assert_eq!(CodeCase::Lower.apply("ES"), "es");
        assert_eq!(CodeCase::Keep.apply("Fra"), "Fra");
    }
}
