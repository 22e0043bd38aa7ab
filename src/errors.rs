use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while parsing a scenario file. The loader aborts on the
/// first error, a half-built network has no well-defined usage counts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: malformed header: {reason}")]
    MalformedHeader { line: usize, reason: String },
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("line {line}: car route references unknown street '{name}'")]
    UnknownStreetReference { line: usize, name: String },
    #[error("failed to read scenario file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write schedule file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
