use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the lookup tables come from. `None` means the bundled copy.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Tab-delimited country code table
    pub country_codes: Option<PathBuf>,
    /// Tab-delimited language code table
    pub language_codes: Option<PathBuf>,
    /// JSON translation table, read by the json provider
    pub translations: Option<PathBuf>,
}
