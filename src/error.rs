//! Error types for argument handling, metric sources and the sample loop.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected command-line input. Always fatal, reported before any output.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("Duplicate {0} flag")]
    Duplicate(&'static str),

    #[error("Positional {0} argument is specified. Don't use the --{0} flag.")]
    PositionalConflict(&'static str),

    #[error("Invalid {0} value: must be a positive integer")]
    NotPositive(&'static str),

    /// A bare value after the first flag; positionals must come first.
    #[error("Unrecognized argument '{0}'.")]
    Unrecognized(String),

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

/// A metric exposition could not be read or did not have the expected shape.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("the operating system reported no online processors")]
    NoProcessors,
}

impl SourceError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SourceError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of a sampling run. Nothing is retried; the first error ends the run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to write to the terminal: {0}")]
    Render(#[from] io::Error),
}
