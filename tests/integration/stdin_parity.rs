// tests/integration/stdin_parity.rs
use crate::common::{TempWorkspace, count_line, nol};

#[test]
fn reads_stdin_without_arguments() {
    nol()
        .write_stdin("alpha\nbeta\n")
        .assert()
        .success()
        .stdout(count_line(2));
}

#[test]
fn empty_stdin_is_zero() {
    nol().write_stdin("").assert().success().stdout(count_line(0));
}

#[test]
fn stdin_and_path_agree() {
    let ws = TempWorkspace::new();
    let inputs: [&[u8]; 5] = [
        b"",
        b"\n",
        b"no newline",
        b"\r\n\r\n\n",
        &[0xff, 0x00, b'\n', 0x80, b'\n'],
    ];

    for (i, contents) in inputs.into_iter().enumerate() {
        let path = ws.write_file(&format!("case{i}"), contents);

        let from_file = nol().arg(&path).assert().success();
        let from_stdin = nol().write_stdin(contents.to_vec()).assert().success();

        assert_eq!(
            from_file.get_output().stdout,
            from_stdin.get_output().stdout,
            "case {i} differs"
        );
    }
}
