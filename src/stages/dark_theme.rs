use crate::sheet::{Node, Stylesheet};
use tracing::debug;

/// Attribute selector scoping rules to the dark theme
pub const DARK_THEME_SELECTOR: &str = r#"[data-theme="dark"]"#;

/// Comment announcing the dark theme variable block
const DARK_THEME_MARKER: &str = "/* Dark Theme */";

/// Removes the dark theme variable block together with its marker comment.
///
/// The block is the first top-level `[data-theme="dark"] { ... }` rule whose
/// leading comments contain `/* Dark Theme */`. The marker and everything
/// between it and the block is removed; text before the marker stays.
///
/// Must run before [`remove_dark_theme_blocks`], which would otherwise take the
/// block and leave the marker comment dangling.
pub fn remove_primary_dark_theme_block(css: &str) -> String {
    let mut sheet = Stylesheet::parse(css);
    let nodes = sheet.nodes_mut();

    let hit = nodes.iter().enumerate().find_map(|(index, node)| match node {
        Node::Block(block) if block.matches(DARK_THEME_SELECTOR) => block
            .leading
            .find(DARK_THEME_MARKER)
            .map(|marker| (index, block.leading[..marker].to_string())),
        _ => None,
    });

    match hit {
        Some((index, kept)) if kept.is_empty() => {
            nodes.remove(index);
        }
        Some((index, kept)) => nodes[index] = Node::Text(kept),
        None => return css.to_string(),
    }

    sheet.render()
}

/// Removes every remaining rule whose selector starts with `[data-theme="dark"]`.
///
/// Rules are found at any depth, so dark overrides inside `@media` blocks go
/// too. Comments in front of a removed rule are kept.
///
/// # Example
///
/// ```rust
/// use restyle::stages::remove_dark_theme_blocks;
///
/// let css = ".a { color: red; }\n[data-theme=\"dark\"] .a { color: white; }\n";
///
/// assert_eq!(remove_dark_theme_blocks(css), ".a { color: red; }\n\n");
/// ```
pub fn remove_dark_theme_blocks(css: &str) -> String {
    let mut sheet = Stylesheet::parse(css);
    let removed =
        sheet.remove_blocks_where(|block| block.selector().starts_with(DARK_THEME_SELECTOR));

    if removed == 0 {
        return css.to_string();
    }

    debug!(removed, "removed dark theme rules");
    sheet.render()
}
