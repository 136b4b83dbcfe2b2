//! Error types for file processing.
//!
//! The library reports structured errors. The binary wraps them in `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmeltError {
    /// Reading the input or writing the output failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be parsed as JSON
    #[error("Invalid JSON in {path:?} at line {line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The output name cannot be derived from the input name
    #[error("Cannot derive output name for {path:?}: file name has no \".json\"")]
    OutputName { path: PathBuf },

    /// A flattened document could not be serialized
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SmeltError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SmeltError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SmeltError>;
