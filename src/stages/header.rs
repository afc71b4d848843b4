use crate::sheet::{Block, Stylesheet};

const HEADER_SELECTOR: &str = ".header";

/// Fixed, translucent header laid over the page content
const HEADER_OVERLAY: &str = "
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    background: rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    box-shadow: none;
    z-index: 1000;
    transition: var(--transition);
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
";

/// Replaces the first `.header` rule with the overlay header.
///
/// Like the `:root` replacement this discards the original declarations.
/// Compound selectors such as `.header .logo` are left alone.
pub fn replace_header(css: &str) -> String {
    let mut sheet = Stylesheet::parse(css);

    if let Some(block) = sheet.find_block_mut(HEADER_SELECTOR) {
        block.replace_with(Block::new(".header ", HEADER_OVERLAY));
    }

    sheet.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_header_rule() {
        let css = ".header {\n    position: sticky;\n    background: var(--white);\n}\n";
        let result = replace_header(css);

        assert!(result.starts_with(".header {\n    position: fixed;\n"));
        assert!(result.contains("    background: rgba(0, 0, 0, 0.3);\n"));
        assert!(!result.contains("sticky"));
        assert!(!result.contains("var(--white)"));
    }

    #[test]
    fn test_leaves_compound_selectors() {
        let css = ".header .logo { height: 40px; }\n.header-inner { display: flex; }\n";
        assert_eq!(replace_header(css), css);
    }

    #[test]
    fn test_missing_header_is_noop() {
        let css = ".footer { color: red; }";
        assert_eq!(replace_header(css), css);
    }
}
