//! Ordered stage list and the loop that runs it
//!
//! Each stage declares the stages that must have run before it. Custom lists
//! are checked by [`Pipeline::new`]; the standard list is checked in debug
//! builds by [`Pipeline::standard`].

use crate::error::{RestyleError, Result};
use crate::stages;
use crate::types::StageOutcome;
use std::fmt;
use tracing::debug;

/// A named rewrite of the whole document
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    /// Stages that must appear earlier in the pipeline
    pub requires: &'static [&'static str],
    pub apply: fn(&str) -> String,
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

/// The stage sequence of a standard run
///
/// - `dark-theme-scattered` after `dark-theme-primary`: the scattered sweep
///   would otherwise remove the primary block and strand its marker comment
/// - section and accent stages after `dark-theme-scattered`: nested rules of a
///   dark theme block must not be the first match for a selector
/// - `dark-sections` after `light-sections`: the dark palette wins when a
///   selector is listed twice
/// - `collapse-newlines` after the removals, which leave blank line runs
pub const STANDARD_STAGES: [Stage; 10] = [
    Stage {
        name: "root-variables",
        requires: &[],
        apply: stages::replace_root_variables,
    },
    Stage {
        name: "dark-theme-primary",
        requires: &[],
        apply: stages::remove_primary_dark_theme_block,
    },
    Stage {
        name: "dark-theme-scattered",
        requires: &["dark-theme-primary"],
        apply: stages::remove_dark_theme_blocks,
    },
    Stage {
        name: "header-overlay",
        requires: &[],
        apply: stages::replace_header,
    },
    Stage {
        name: "spacing",
        requires: &[],
        apply: stages::normalize_section_padding,
    },
    Stage {
        name: "light-sections",
        requires: &["dark-theme-scattered"],
        apply: stages::paint_light_sections,
    },
    Stage {
        name: "dark-sections",
        requires: &["dark-theme-scattered", "light-sections"],
        apply: stages::paint_dark_sections,
    },
    Stage {
        name: "nav-accent",
        requires: &["dark-theme-scattered"],
        apply: stages::whiten_nav_links,
    },
    Stage {
        name: "phone-accent",
        requires: &["dark-theme-scattered"],
        apply: stages::whiten_phone_link,
    },
    Stage {
        name: "collapse-newlines",
        requires: &["dark-theme-primary", "dark-theme-scattered"],
        apply: stages::collapse_blank_lines,
    },
];

/// Output of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub css: String,
    pub outcomes: Vec<StageOutcome>,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Build a pipeline, checking every stage runs after the stages it requires
    pub fn new(stages: Vec<Stage>) -> Result<Self> {
        check_order(&stages)?;
        Ok(Self { stages })
    }

    /// The [`STANDARD_STAGES`] pipeline
    ///
    /// The list is checked like any other; a broken requirement in it is a
    /// programming error and panics in debug builds.
    pub fn standard() -> Self {
        let stages = STANDARD_STAGES.to_vec();
        debug_assert!(
            check_order(&stages).is_ok(),
            "standard stages break their own ordering"
        );
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Apply every stage in order. Stages never fail, so neither does a run.
    pub fn run(&self, css: &str) -> Transformed {
        let mut document = css.to_string();
        let mut outcomes = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let next = (stage.apply)(&document);
            let changed = next != document;
            debug!(stage = stage.name, changed, "stage applied");

            outcomes.push(StageOutcome {
                stage: stage.name,
                changed,
            });
            document = next;
        }

        Transformed {
            css: document,
            outcomes,
        }
    }
}

fn check_order(stages: &[Stage]) -> Result<()> {
    for (index, stage) in stages.iter().enumerate() {
        for &requires in stage.requires {
            if !stages[..index].iter().any(|earlier| earlier.name == requires) {
                return Err(RestyleError::StageOrder {
                    stage: stage.name,
                    requires,
                });
            }
        }
    }
    Ok(())
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
