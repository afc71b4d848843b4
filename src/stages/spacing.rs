use regex::Regex;
use std::sync::LazyLock;

/// `padding: 5rem 0` and `padding: 4rem 0`, with any spacing
static LEGACY_SECTION_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"padding:\s*[45]rem\s+0").expect("valid padding pattern"));

const SECTION_PADDING: &str = "padding: 2.5rem 0";

/// Rewrites the legacy vertical section paddings to `padding: 2.5rem 0`.
///
/// This is a plain token substitution over the whole document: it applies in
/// every rule, and only the matched prefix is rewritten.
pub fn normalize_section_padding(css: &str) -> String {
    LEGACY_SECTION_PADDING
        .replace_all(css, SECTION_PADDING)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_both_legacy_values() {
        let css = ".a { padding: 5rem 0; }\n.b { padding: 4rem 0; }";
        assert_eq!(
            normalize_section_padding(css),
            ".a { padding: 2.5rem 0; }\n.b { padding: 2.5rem 0; }"
        );
    }

    #[test]
    fn test_tolerates_spacing_variants() {
        let css = ".a { padding:5rem  0; }\n.b { padding:\n    4rem\t0; }";
        assert_eq!(
            normalize_section_padding(css),
            ".a { padding: 2.5rem 0; }\n.b { padding: 2.5rem 0; }"
        );
    }

    #[test]
    fn test_leaves_other_paddings() {
        let css = ".a { padding: 3rem 0; padding-top: 5rem 0; padding: 15rem 0; padding: 5rem 2rem; }";
        assert_eq!(normalize_section_padding(css), css);
    }

    #[test]
    fn test_every_occurrence_is_rewritten() {
        let css = ".a { padding: 5rem 0; }\n".repeat(3) + &".b { padding: 4rem 0; }\n".repeat(2);
        let result = normalize_section_padding(&css);

        assert!(!result.contains("padding: 5rem 0"));
        assert!(!result.contains("padding: 4rem 0"));
        assert_eq!(result.matches("padding: 2.5rem 0").count(), 5);
    }
}
