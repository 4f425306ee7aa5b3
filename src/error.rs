// src/error.rs
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures that end a run.
///
/// Only `SourceNotFound` carries a user-facing message; `Io` is reported
/// through the exit code alone. `Display` renders paths lossily and is meant
/// for logs; stdout goes through `output::write_failure`, which keeps the
/// path's bytes.
#[derive(Debug, Error)]
pub enum NolError {
    #[error("Error: {} - file not found.", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NolError>;

impl NolError {
    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SourceNotFound { .. } | Self::Io(_) => 1,
        }
    }

    /// The path that could not be opened, if that is what went wrong.
    #[must_use]
    pub fn missing_path(&self) -> Option<&Path> {
        match self {
            Self::SourceNotFound { path, .. } => Some(path),
            Self::Io(_) => None,
        }
    }
}
