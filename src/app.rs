// src/app.rs
use crate::config::Config;
use crate::counter::LineCounter;
use crate::error::{NolError, Result};
use crate::input::InputSource;
use crate::output;
use std::io::Write;

/// Open `source`, scan it to end-of-stream, release it, return the count.
///
/// # Errors
///
/// `SourceNotFound` if a file source cannot be opened, `Io` for read failures.
pub fn count_source(source: &InputSource) -> Result<u64> {
    log::debug!("reading from {}", source.label());
    let mut reader = source.open()?;
    let mut counter = LineCounter::new();
    counter.read_from(&mut reader)?;
    // 読み込み完了後、報告前にストリームを解放
    drop(reader);
    log::debug!(
        "{}: {} bytes, {} newlines",
        source.label(),
        counter.bytes(),
        counter.lines()
    );
    Ok(counter.lines())
}

/// Run once: count the configured source and write the report to `out`.
///
/// Nothing is written to `out` on failure; see [`report_failure`].
///
/// # Errors
///
/// Any error from [`count_source`], or a failure writing the report.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> Result<u64> {
    let lines = count_source(&config.source)?;
    output::write_count(out, lines)?;
    Ok(lines)
}

/// Print whatever the user should see for `err` and return the exit status.
pub fn report_failure<W: Write + ?Sized>(out: &mut W, err: &NolError) -> u8 {
    log::debug!("run failed: {err}");
    if let Err(e) = output::write_failure(out, err) {
        log::debug!("could not write failure message: {e}");
    }
    err.exit_code()
}
