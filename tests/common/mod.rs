// tests/common/mod.rs
//! Shared helpers for the binary-level tests.


#[allow(unused_imports)]
pub use temp::TempWorkspace;

use assert_cmd::Command;
use predicates::str::DifferencePredicate;

/// A fresh invocation of the built `nol` binary.
#[allow(dead_code)]
pub fn nol() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nol"))
}

/// Expected stdout for a successful run.
#[allow(dead_code)]
pub fn count_line(lines: u64) -> DifferencePredicate {
    predicates::str::diff(format!("Number of lines: {lines}\n"))
}
