use serde::Serialize;
use std::path::PathBuf;

/// Color scheme applied to a page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Pale background, text color left to the stylesheet
    Light,
    /// Near-black background with white text
    Dark,
}

impl Palette {
    /// Background color for sections using this palette
    pub fn background(self) -> &'static str {
        match self {
            Palette::Light => "#f4f4f4",
            Palette::Dark => "#0d0d0f",
        }
    }

    /// Text color forced onto sections using this palette, if any
    pub fn text(self) -> Option<&'static str> {
        match self {
            Palette::Light => None,
            Palette::Dark => Some("#ffffff"),
        }
    }
}

/// A section selector and the palette it should be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Class selector of the section rule, e.g. `.services`
    pub selector: &'static str,
    pub palette: Palette,
}

impl SectionSpec {
    pub const fn light(selector: &'static str) -> Self {
        Self {
            selector,
            palette: Palette::Light,
        }
    }

    pub const fn dark(selector: &'static str) -> Self {
        Self {
            selector,
            palette: Palette::Dark,
        }
    }
}

/// Where to read the stylesheet from and where to write the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunConfig {
    /// Rewrite `path` in place
    pub fn in_place(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            input: path.clone(),
            output: path,
        }
    }

    /// Read `input`, write the result to `output`
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn is_in_place(&self) -> bool {
        self.input == self.output
    }
}

/// Result of running one pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutcome {
    pub stage: &'static str,
    /// Whether the stage modified the document
    pub changed: bool,
}

/// Summary of a whole file transformation
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    pub stages: Vec<StageOutcome>,
}

impl RunReport {
    /// Names of the stages that modified the document
    pub fn changed_stages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().filter(|s| s.changed).map(|s| s.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors() {
        assert_eq!(Palette::Light.background(), "#f4f4f4");
        assert_eq!(Palette::Light.text(), None);
        assert_eq!(Palette::Dark.background(), "#0d0d0f");
        assert_eq!(Palette::Dark.text(), Some("#ffffff"));
    }

    #[test]
    fn test_run_config_in_place() {
        let config = RunConfig::in_place("site/style.css");
        assert_eq!(config.input, config.output);
        assert!(config.is_in_place());

        let config = RunConfig::new("style.css", "out.css");
        assert!(!config.is_in_place());
    }

    #[test]
    fn test_report_serializes_stage_outcomes() {
        let report = RunReport {
            input: PathBuf::from("in.css"),
            output: PathBuf::from("out.css"),
            bytes_read: 10,
            bytes_written: 8,
            stages: vec![
                StageOutcome {
                    stage: "spacing",
                    changed: true,
                },
                StageOutcome {
                    stage: "nav-accent",
                    changed: false,
                },
            ],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"], "in.css");
        assert_eq!(json["stages"][0]["stage"], "spacing");
        assert_eq!(json["stages"][1]["changed"], false);
        assert_eq!(report.changed_stages().collect::<Vec<_>>(), vec!["spacing"]);
    }
}
