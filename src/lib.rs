//! Count the newline bytes in a file or standard input.

pub mod app;
pub mod args;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod output;

pub use counter::LineCounter;
pub use error::{NolError, Result};
pub use input::InputSource;

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
