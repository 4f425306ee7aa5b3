// src/counter.rs
use std::io::{self, BufRead};

/// The only line terminator recognised. `\r` is an ordinary byte.
pub const NEWLINE: u8 = b'\n';

/// Count newline bytes in a slice.
#[must_use]
pub fn count_newlines(buf: &[u8]) -> u64 {
    bytecount::count(buf, NEWLINE) as u64
}

/// Running newline tally over a byte stream.
///
/// Semantically this is a byte-at-a-time scan; in practice it consumes
/// whatever chunk the reader has buffered and counts it in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounter {
    lines: u64,
    bytes: u64,
}

impl LineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: 0, bytes: 0 }
    }

    /// Newlines seen so far.
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// Bytes seen so far.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Account for one chunk of input.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.lines += count_newlines(chunk);
        self.bytes += chunk.len() as u64;
    }

    /// Drain `reader` to end-of-stream.
    ///
    /// # Errors
    ///
    /// Propagates any read error other than `Interrupted`, which is retried.
    pub fn read_from<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> io::Result<()> {
        loop {
            let buf = match reader.fill_buf() {
                Ok([]) => break,
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.feed(buf);
            let len = buf.len();
            reader.consume(len);
        }
        Ok(())
    }

    /// Convenience wrapper: count every newline `reader` yields.
    ///
    /// # Errors
    ///
    /// See [`LineCounter::read_from`].
    pub fn count<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<u64> {
        let mut counter = Self::new();
        counter.read_from(reader)?;
        Ok(counter.lines())
    }
}
