use std::collections::HashMap;
use std::path::Path;

use crate::error::{LoadError, read_resource};

const NAME_FIELD: usize = 0;
const CODE_FIELD: usize = 2;
const MIN_FIELDS: usize = 3;

/// One row of a code table: a display name and its short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub name: String,
    pub code: String,
}

/// Bidirectional code <-> name mapping built once from a tab-delimited table.
///
/// The same format backs both country codes ("CAN" <-> "Canada") and
/// language codes ("es" <-> "Spanish"). Codes are stored exactly as they
/// appear in the source, so callers pick the case before querying.
#[derive(Debug, Clone, Default)]
pub struct CodeConverter {
    entries: Vec<CodeEntry>,
    code_to_name: HashMap<String, String>,
    name_to_code: HashMap<String, String>,
}

impl CodeConverter {
    /// Parse table text. The first line is a header; data lines with fewer
    /// than three tab-separated fields are skipped.
    pub fn parse(source: &str) -> Self {
        let mut converter = Self::default();

        for (line_no, line) in source.lines().enumerate().skip(1) {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < MIN_FIELDS {
                if !line.trim().is_empty() {
                    tracing::warn!("Skipping malformed code table line {}", line_no + 1);
                }
                continue;
            }

            let name = fields[NAME_FIELD].trim().to_string();
            let code = fields[CODE_FIELD].trim().to_string();
            converter.insert(CodeEntry { name, code });
        }

        converter
    }

    /// Load a code table from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        tracing::info!("Loading code table from file: {}", path.display());
        let source = read_resource(path)?;
        let converter = Self::parse(&source);
        tracing::info!("Loaded {} codes from {}", converter.count(), path.display());
        Ok(converter)
    }

    /// Bundled ISO 3166 alpha-3 country table (codes upper-case).
    pub fn embedded_countries() -> Self {
        let converter = Self::parse(include_str!("../../../data/country-codes.txt"));
        tracing::info!("Loaded {} embedded country codes", converter.count());
        converter
    }

    /// Bundled ISO 639-1 language table (codes lower-case).
    pub fn embedded_languages() -> Self {
        let converter = Self::parse(include_str!("../../../data/language-codes.txt"));
        tracing::info!("Loaded {} embedded language codes", converter.count());
        converter
    }

    /// Display name for `code`, exact match.
    pub fn from_code(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    /// Code for the display name `name`, exact match.
    pub fn from_name(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.code_to_name.len()
    }

    /// Entries in source order.
    pub fn entries(&self) -> impl Iterator<Item = &CodeEntry> + '_ {
        self.entries.iter()
    }

    fn insert(&mut self, entry: CodeEntry) {
        // A repeated code or name replaces the earlier row in both directions.
        if let Some(old_name) = self.code_to_name.remove(&entry.code) {
            self.name_to_code.remove(&old_name);
            self.entries.retain(|e| e.code != entry.code);
        }
        if let Some(old_code) = self.name_to_code.remove(&entry.name) {
            self.code_to_name.remove(&old_code);
            self.entries.retain(|e| e.name != entry.name);
        }

        self.code_to_name.insert(entry.code.clone(), entry.name.clone());
        self.name_to_code.insert(entry.name.clone(), entry.code.clone());
        self.entries.push(entry);
    }
}
