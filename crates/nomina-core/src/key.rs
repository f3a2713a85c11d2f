/// Canonical form of a country or language code used as a table key.
///
/// Every translator inserts and queries through this function, so lookups
/// are case-insensitive no matter how callers spell the code.
pub fn code_key(code: &str) -> String {
    code.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_key_folds_case() {
        assert_eq!(code_key("CAN"), "can");
        assert_eq!(code_key("Es"), "es");
        assert_eq!(code_key("fra"), "fra");
    }

    #[test]
    fn test_code_key_keeps_whitespace() {
        // Trimming is the caller's job; a padded code is a different key.
        assert_eq!(code_key(" CAN"), " can");
    }
}
