//! Error types for the CLI surface
//!
//! Classification itself is total and never fails: invalid input maps
//! to the `Unknown` label, not an error. These variants exist for the
//! binary's I/O and output encoding only.

use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexidentError>;

#[derive(Debug, Error)]
pub enum LexidentError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LexidentError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(2),
            Self::Io(_) => ExitCode::from(3),
            Self::Serialization(_) => ExitCode::from(4),
        }
    }
}
