use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"));

/// Collapses three or more consecutive newlines into two.
pub fn collapse_blank_lines(css: &str) -> String {
    BLANK_LINE_RUN.replace_all(css, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_long_runs() {
        assert_eq!(collapse_blank_lines(".a {}\n\n\n\n\n.b {}"), ".a {}\n\n.b {}");
        assert_eq!(collapse_blank_lines(".a {}\n\n\n.b {}\n\n\n"), ".a {}\n\n.b {}\n\n");
    }

    #[test]
    fn test_keeps_single_blank_lines() {
        let css = ".a {}\n\n.b {\n    color: red;\n}\n";
        assert_eq!(collapse_blank_lines(css), css);
    }

    #[test]
    fn test_lines_with_spaces_are_not_blank_runs() {
        let css = ".a {}\n\n  \n\n.b {}";
        assert_eq!(collapse_blank_lines(css), css);
    }
}
