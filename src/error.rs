use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestyleError {
    #[error("Failed to read stylesheet {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write stylesheet {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stage '{stage}' must run after '{requires}'")]
    StageOrder {
        stage: &'static str,
        requires: &'static str,
    },

    #[error("Run report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RestyleError>;
