// src/config.rs
use crate::args::Args;
use crate::input::InputSource;
use std::path::PathBuf;

/// Resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: InputSource,
}

impl Config {
    #[must_use]
    pub const fn new(source: InputSource) -> Self {
        Self { source }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        if !args.rest.is_empty() {
            log::debug!("ignoring {} extra argument(s)", args.rest.len());
        }
        Self::new(InputSource::from_arg(args.path.map(PathBuf::from)))
    }
}
