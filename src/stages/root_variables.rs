use crate::sheet::{Block, Stylesheet};

const ROOT_SELECTOR: &str = ":root";

/// Custom properties of the dark-first theme
const ROOT_VARIABLES: &str = "
    --primary-color: #8d46f6;
    --primary-dark: #7a3de0;
    --secondary-color: #ff6914;
    --text-dark: #ffffff;
    --text-light: #d1d5db;
    --bg-light: #f4f4f4;
    --bg-main: #0d0d0f;
    --bg-dark: #0d0d0f;
    --white: #ffffff;
    --black: #000000;
    --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
    --shadow-lg: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
    --transition: all 0.3s ease;
";

/// Replaces the first `:root` block with the dark-first theme variables.
///
/// The whole block is swapped: none of the original custom properties survive,
/// even ones the new block does not define. Comments and whitespace in front of
/// the block are kept. Documents without a `:root` block are returned as is.
///
/// # Example
///
/// ```rust
/// use restyle::stages::replace_root_variables;
///
/// let css = replace_root_variables(":root {\n    --primary-color: #2563eb;\n}\n");
///
/// assert!(css.contains("--primary-color: #8d46f6;"));
/// assert!(!css.contains("#2563eb"));
/// ```
pub fn replace_root_variables(css: &str) -> String {
    let mut sheet = Stylesheet::parse(css);

    if let Some(block) = sheet.find_block_mut(ROOT_SELECTOR) {
        block.replace_with(Block::new(":root ", ROOT_VARIABLES));
    }

    sheet.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_whole_block() {
        let css = ":root {\n    --primary-color: #2563eb;\n    --legacy-only: 1px;\n}\n";
        let result = replace_root_variables(css);

        assert!(result.starts_with(":root {\n    --primary-color: #8d46f6;\n"));
        assert!(result.ends_with("    --transition: all 0.3s ease;\n}\n"));
        assert!(!result.contains("--legacy-only"));
        assert!(!result.contains("#2563eb"));
    }

    #[test]
    fn test_keeps_leading_comment_and_following_rules() {
        let css = "/* Variables */\n:root { --x: 1; }\n\nbody { margin: 0; }\n";
        let result = replace_root_variables(css);

        assert!(result.starts_with("/* Variables */\n:root {\n"));
        assert!(result.ends_with("}\n\nbody { margin: 0; }\n"));
    }

    #[test]
    fn test_only_first_root_block_is_replaced() {
        let css = ":root { --a: 1; }\n:root { --b: 2; }";
        let result = replace_root_variables(css);

        assert!(!result.contains("--a: 1;"));
        assert!(result.ends_with(":root { --b: 2; }"));
    }

    #[test]
    fn test_root_with_nested_braces_is_replaced_entirely() {
        let css = ":root {\n    --a: 1;\n    @media print { --a: 2; }\n    --b: 3;\n}\nbody {}";
        let result = replace_root_variables(css);

        assert!(!result.contains("--b: 3;"));
        assert!(!result.contains("@media print"));
        assert!(result.ends_with("}\nbody {}"));
    }

    #[test]
    fn test_missing_root_is_noop() {
        let css = "body { color: red; }\n";
        assert_eq!(replace_root_variables(css), css);
    }

    #[test]
    fn test_replacing_twice_is_stable() {
        let once = replace_root_variables(":root { --x: 1; }");
        assert_eq!(replace_root_variables(&once), once);
    }
}
