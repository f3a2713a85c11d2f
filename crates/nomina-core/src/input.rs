use unicode_normalization::UnicodeNormalization;

/// Canonical form of a line typed at a prompt.
///
/// Applies NFKC so composed accents and full-width letters match the code
/// tables, then folds every whitespace run (line endings included) into a
/// single space and drops it at both ends.
pub fn normalize_input(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();

    let mut out = String::with_capacity(folded.len());
    for word in folded.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_input("  Canada \r\n"), "Canada");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_input(" \t \n"), "");
        assert_eq!(normalize_input(""), "");
    }

    #[test]
    fn test_composes_accents() {
        // "e" + combining acute accent
        assert_eq!(normalize_input("Me\u{301}xico"), "México");
    }

    #[test]
    fn test_folds_full_width() {
        assert_eq!(normalize_input("Ｃａｎａｄａ"), "Canada");
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(
            normalize_input("United  States\tof   America\n"),
            "United States of America"
        );
    }

    #[test]
    fn test_ideographic_space() {
        // U+3000 becomes a plain space under NFKC
        assert_eq!(normalize_input("New\u{3000}Zealand"), "New Zealand");
    }
}
