use crate::sheet::Stylesheet;
use crate::types::SectionSpec;
use tracing::debug;

/// Sections painted with the light palette
pub const LIGHT_SECTIONS: [SectionSpec; 5] = [
    SectionSpec::light(".services"),
    SectionSpec::light(".yandex-badge-section"),
    SectionSpec::light(".reviews-section"),
    SectionSpec::light(".order"),
    SectionSpec::light(".contacts"),
];

/// Sections painted with the dark palette
pub const DARK_SECTIONS: [SectionSpec; 10] = [
    SectionSpec::dark(".projects-section"),
    SectionSpec::dark(".other-events"),
    SectionSpec::dark(".gallery"),
    SectionSpec::dark(".about"),
    SectionSpec::dark(".adventure-section"),
    SectionSpec::dark(".challenges-section"),
    SectionSpec::dark(".after-show-section"),
    SectionSpec::dark(".faq-section"),
    SectionSpec::dark(".map-section"),
    SectionSpec::dark(".footer"),
];

/// Paints every section of [`LIGHT_SECTIONS`]
pub fn paint_light_sections(css: &str) -> String {
    paint_sections(css, &LIGHT_SECTIONS)
}

/// Paints every section of [`DARK_SECTIONS`]
pub fn paint_dark_sections(css: &str) -> String {
    paint_sections(css, &DARK_SECTIONS)
}

/// Sets the palette colors on the rule of each section, in list order.
///
/// For each section the rule whose selector is exactly the section selector
/// (the first top-level one, else the first nested one) gets every `background`
/// declaration overwritten, or one appended when it has none. Palettes with a
/// text color do the same for `color`. Other declarations are untouched and
/// missing sections are skipped.
///
/// Painting is idempotent: a second pass overwrites the declarations the first
/// pass added.
///
/// # Example
///
/// ```rust
/// use restyle::stages::sections::paint_sections;
/// use restyle::types::SectionSpec;
///
/// let css = paint_sections(".about { background: #111; }", &[SectionSpec::dark(".about")]);
///
/// assert_eq!(css, ".about { background: #0d0d0f; color: #ffffff; }");
/// ```
pub fn paint_sections(css: &str, sections: &[SectionSpec]) -> String {
    let mut sheet = Stylesheet::parse(css);
    let mut painted = 0;

    for section in sections {
        let Some(block) = sheet.find_block_mut(section.selector) else {
            debug!(selector = section.selector, "section not found");
            continue;
        };

        let background = block.set_declaration("background", section.palette.background());
        let color = section
            .palette
            .text()
            .map(|text| block.set_declaration("color", text));

        debug!(
            selector = section.selector,
            ?background,
            ?color,
            "painted section"
        );
        painted += 1;
    }

    if painted == 0 {
        return css.to_string();
    }
    sheet.render()
}
