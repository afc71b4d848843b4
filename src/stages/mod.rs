//! Rewrite stages applied to the stylesheet text
//!
//! Every stage is a total `&str -> String` function: when its anchor is not in
//! the document it returns the input unchanged.
//!
//! - `root_variables`: Replace the `:root` custom property block
//! - `dark_theme`: Remove `[data-theme="dark"]` blocks
//! - `header`: Replace the `.header` rule with the translucent overlay header
//! - `spacing`: Shrink legacy section paddings
//! - `sections`: Paint section rules with their light or dark palette
//! - `accent`: Force link colors to white
//! - `whitespace`: Collapse runs of blank lines

pub mod accent;
pub mod dark_theme;
pub mod header;
pub mod root_variables;
pub mod sections;
pub mod spacing;
pub mod whitespace;

// Re-export commonly used functions
pub use accent::{whiten_nav_links, whiten_phone_link};
pub use dark_theme::{remove_dark_theme_blocks, remove_primary_dark_theme_block};
pub use header::replace_header;
pub use root_variables::replace_root_variables;
pub use sections::{paint_dark_sections, paint_light_sections};
pub use spacing::normalize_section_padding;
pub use whitespace::collapse_blank_lines;
