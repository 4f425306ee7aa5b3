// src/input.rs
//! Input source resolution and scoped opening.
//!
//! The reader returned by [`InputSource::open`] owns the underlying `File`
//! (or the stdin lock). Dropping it releases the stream, so every exit path
//! out of the read loop closes the source.

use crate::error::{NolError, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the bytes come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// The process's standard input.
    #[default]
    Stdin,
    /// A file named on the command line, taken literally.
    File(PathBuf),
}

impl InputSource {
    /// Resolve the optional path argument. Absent means stdin.
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdin, Self::File)
    }

    /// The file path, if this source is a file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }

    /// Short label for diagnostics ("-" for stdin).
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        self.path().map_or(Cow::Borrowed("-"), Path::to_string_lossy)
    }

    /// Open the source for buffered reading.
    ///
    /// # Errors
    ///
    /// Returns [`NolError::SourceNotFound`] when a file source cannot be
    /// opened for any reason. Opening stdin never fails.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| NolError::SourceNotFound {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
