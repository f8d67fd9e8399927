use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run
///
/// Malformed input lines are not represented here; the parser drops them.
#[derive(Debug, Error)]
pub enum SporkError {
    #[error("expected 6 arguments, got {got}")]
    Usage { got: usize },

    #[error("Could not read input file {}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write output file {}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SporkError {
    /// True for the two file-open failures
    pub fn is_file_open(&self) -> bool {
        matches!(self, SporkError::InputOpen { .. } | SporkError::OutputOpen { .. })
    }
}
