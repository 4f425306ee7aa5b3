use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn counts_own_manifest() {
    Command::new(env!("CARGO_BIN_EXE_nol"))
        .arg("Cargo.toml")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Number of lines: "));
}

#[test]
fn no_arguments_reads_stdin() {
    Command::new(env!("CARGO_BIN_EXE_nol"))
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("Number of lines: 1\n");
}
