use crate::sheet::Stylesheet;

/// Link color on the dark-first theme
pub const ACCENT_COLOR: &str = "#ffffff";

const NAV_LINK_SELECTOR: &str = ".nav-menu a";
const PHONE_LINK_SELECTOR: &str = ".phone-link";

/// Whitens the navigation menu links
pub fn whiten_nav_links(css: &str) -> String {
    whiten_link(css, NAV_LINK_SELECTOR)
}

/// Whitens the header phone link
pub fn whiten_phone_link(css: &str) -> String {
    whiten_link(css, PHONE_LINK_SELECTOR)
}

/// Overwrites every `color` declaration of the rule for `selector` with
/// [`ACCENT_COLOR`]. Unlike section painting this never adds a declaration.
pub fn whiten_link(css: &str, selector: &str) -> String {
    let mut sheet = Stylesheet::parse(css);

    let replaced = sheet
        .find_block_mut(selector)
        .is_some_and(|block| block.replace_declaration("color", ACCENT_COLOR));

    if replaced {
        sheet.render()
    } else {
        css.to_string()
    }
}
