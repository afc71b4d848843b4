//! # restyle
//!
//! A library for rewriting a site stylesheet into its dark-first variant.
//!
//! The stylesheet goes through a fixed list of stages: the `:root` variables
//! are replaced, `[data-theme="dark"]` rules are removed, the header becomes a
//! translucent overlay, section paddings shrink, sections are painted with their
//! light or dark palette, link colors are whitened and blank line runs are
//! collapsed. Missing selectors are skipped, so every stage is total.
//!
//! ## Example
//!
//! ```
//! let css = ".services {\n    padding: 5rem 0;\n}\n";
//!
//! let result = restyle::transform(css);
//!
//! assert_eq!(result, ".services {\n    padding: 2.5rem 0;\n    background: #f4f4f4;\n}\n");
//! ```

pub mod error;
pub mod pipeline;
pub mod sheet;
pub mod stages;
pub mod types;

use std::fs;
use tracing::info;

// Re-export commonly used items
pub use error::{RestyleError, Result};
pub use pipeline::{Pipeline, Transformed};
pub use types::{Palette, RunConfig, RunReport, SectionSpec, StageOutcome};

/// Run the standard pipeline over stylesheet text
pub fn transform(css: &str) -> String {
    Pipeline::standard().run(css).css
}

/// Read the stylesheet at `config.input`, transform it and write the result to
/// `config.output`
///
/// Nothing is written when the input cannot be read. The output is written in
/// one go with no backup; for an in-place run a failed write can lose the
/// original file.
pub fn transform_file(config: &RunConfig) -> Result<RunReport> {
    info!(path = %config.input.display(), "reading stylesheet");
    let css = fs::read_to_string(&config.input).map_err(|source| RestyleError::Read {
        path: config.input.clone(),
        source,
    })?;

    let Transformed { css: output, outcomes } = Pipeline::standard().run(&css);

    info!(
        path = %config.output.display(),
        in_place = config.is_in_place(),
        "writing stylesheet"
    );
    fs::write(&config.output, &output).map_err(|source| RestyleError::Write {
        path: config.output.clone(),
        source,
    })?;

    Ok(RunReport {
        input: config.input.clone(),
        output: config.output.clone(),
        bytes_read: css.len(),
        bytes_written: output.len(),
        stages: outcomes,
    })
}

impl RunReport {
    /// JSON form of the report, indented when `pretty` is set
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_transform_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.css");
        fs::write(&path, ".nav-menu a {\n    color: #333;\n}\n\n\n\n.order { padding: 4rem 0; }\n").unwrap();

        let report = transform_file(&RunConfig::in_place(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            ".nav-menu a {\n    color: #ffffff;\n}\n\n.order { padding: 2.5rem 0; background: #f4f4f4; }\n"
        );
        assert_eq!(report.bytes_written, written.len());
        assert_eq!(
            report.changed_stages().collect::<Vec<_>>(),
            vec!["spacing", "light-sections", "nav-accent", "collapse-newlines"]
        );
    }

    #[test]
    fn test_transform_to_separate_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("style.css");
        let output = dir.path().join("style.dark.css");
        let original = ".about { background: #111; }\n";
        fs::write(&input, original).unwrap();

        let report = transform_file(&RunConfig::new(&input, &output)).unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), original);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            ".about { background: #0d0d0f; color: #ffffff; }\n"
        );
        assert_eq!(report.bytes_read, original.len());
    }

    #[test]
    fn test_missing_input_is_read_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.css");
        let output = dir.path().join("out.css");

        let err = transform_file(&RunConfig::new(&input, &output)).unwrap_err();

        assert!(matches!(err, RestyleError::Read { ref path, .. } if path == &input));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_write_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("style.css");
        fs::write(&input, ".a {}").unwrap();
        let output = dir.path().join("no-such-dir").join("out.css");

        let err = transform_file(&RunConfig::new(&input, &output)).unwrap_err();

        assert!(matches!(err, RestyleError::Write { .. }));
        assert!(err.to_string().contains("out.css"));
    }

    #[test]
    fn test_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.css");
        fs::write(&path, ".a {}").unwrap();

        let report = transform_file(&RunConfig::in_place(&path)).unwrap();
        let compact = report.to_json(false).unwrap();
        let pretty = report.to_json(true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  \"stages\": ["));

        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["stages"].as_array().unwrap().len(), 10);
        assert_eq!(value["stages"][0]["stage"], "root-variables");
    }
}
