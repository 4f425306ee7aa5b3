// src/output.rs
//! Exact stdout formats.

use crate::error::NolError;
use std::io::{self, Write};

/// `Number of lines: N`
///
/// # Errors
///
/// Propagates write/flush failures on `out`.
pub fn write_count<W: Write + ?Sized>(out: &mut W, lines: u64) -> io::Result<()> {
    writeln!(out, "Number of lines: {lines}")?;
    out.flush()
}

/// `Error: <path> - file not found.` for an unopenable source; nothing for
/// other failures. The path is written as its raw OS bytes, not re-encoded.
///
/// # Errors
///
/// Propagates write/flush failures on `out`.
pub fn write_failure<W: Write + ?Sized>(out: &mut W, err: &NolError) -> io::Result<()> {
    if let Some(path) = err.missing_path() {
        out.write_all(b"Error: ")?;
        out.write_all(path.as_os_str().as_encoded_bytes())?;
        out.write_all(b" - file not found.\n")?;
        out.flush()?;
    }
    Ok(())
}
