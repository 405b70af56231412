//! End-to-end tests for the `pats-filter` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn filter_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pats-filter"))
}

fn message(path: &Path, text: &str) -> String {
    format!(
        "{}: 5235(line=167, offs=53) -- 5237(line=167, offs=55): error(3): {}",
        path.display(),
        text
    )
}

fn run_with_stdin(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(filter_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pats-filter");
    // The child may exit before reading stdin (e.g. on a config error).
    if let Err(e) = child.stdin.take().unwrap().write_all(input.as_bytes()) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "{}", e);
    }
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "pats-filter failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// A temp dir with symlinks resolved, so paths under it match the child's cwd.
fn workspace() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    (dir, root)
}

const SUM: &str = "unsolved constraint: S2Eapp(S2Ecst(add_int_int); S2Eintinf(1), S2Eintinf(2))";

#[test]
fn test_stdin_messages_are_folded() {
    let (_dir, root) = workspace();
    let input = format!(
        "{}\ntypechecking has failed\n",
        message(&root.join("src/UTF_8.dats"), SUM)
    );
    let output = run_with_stdin(&root, &[], &input);
    assert_eq!(
        stdout_of(&output),
        "src/UTF_8.dats:167:53: unsolved constraint: \u{2026}\n(1 + 2)\n\ntypechecking has failed\n"
    );
}

#[test]
fn test_files_are_read_in_order() {
    let (_dir, root) = workspace();
    let first = root.join("first.log");
    let second = root.join("second.log");
    std::fs::write(&first, "first\n").unwrap();
    std::fs::write(&second, "second\n").unwrap();

    let output = Command::new(filter_bin())
        .arg(&first)
        .arg(&second)
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), "first\nsecond\n");
}

#[test]
fn test_dash_reads_stdin() {
    let (_dir, root) = workspace();
    let file = root.join("build.log");
    std::fs::write(&file, "from file\n").unwrap();

    let output = run_with_stdin(&root, &[file.to_str().unwrap(), "-"], "from stdin\n");
    assert_eq!(stdout_of(&output), "from file\nfrom stdin\n");
}

#[test]
fn test_no_column_and_absolute_paths() {
    let (_dir, root) = workspace();
    let path = root.join("a.dats");
    let output = run_with_stdin(
        &root,
        &["--no-column", "--absolute-paths"],
        &message(&path, "arity mismatch"),
    );
    assert_eq!(
        stdout_of(&output),
        format!("{}:167: arity mismatch\n\n", path.display())
    );
}

#[test]
fn test_json_output() {
    let (_dir, root) = workspace();
    let input = format!("{}\nother\n", message(&root.join("a.dats"), SUM));
    let output = run_with_stdin(&root, &["--json"], &input);
    let stdout = stdout_of(&output);
    let mut lines = stdout.lines();

    let value: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(value["path"], "a.dats");
    assert_eq!(value["line"], 167);
    assert_eq!(value["col"], 53);
    assert_eq!(value["level"], 3);
    assert_eq!(value["text"], "unsolved constraint: \u{2026}\n(1 + 2)\n");
    assert_eq!(lines.next(), Some("other"));
}

#[test]
fn test_no_simplify() {
    let (_dir, root) = workspace();
    let output = run_with_stdin(
        &root,
        &["--no-simplify"],
        &message(&root.join("a.dats"), "see S2Eintinf(1)"),
    );
    assert_eq!(stdout_of(&output), "a.dats:167:53: see \u{2026}\nS2Eintinf(1)\n\n");
}

#[test]
fn test_width_flag_splits_lines() {
    let (_dir, root) = workspace();
    let input = message(&root.join("a.dats"), "S2Eapp(foo; first_argument, second_argument)");
    let output = run_with_stdin(&root, &["--width", "20"], &input);
    assert_eq!(
        stdout_of(&output),
        "a.dats:167:53: \u{2026}\nfoo(first_argument,\nsecond_argument)\n\n"
    );
}

#[test]
fn test_config_file_in_working_directory() {
    let (_dir, root) = workspace();
    std::fs::write(
        root.join("pats-filter.toml"),
        "column = false\nplaceholder = \"#\"\n",
    )
    .unwrap();
    let output = run_with_stdin(&root, &[], &message(&root.join("a.dats"), "see S2Eintinf(7)"));
    assert_eq!(stdout_of(&output), "a.dats:167: see #\n7\n\n");
}

#[test]
fn test_cli_flags_override_config_file() {
    let (_dir, root) = workspace();
    let config = root.join("custom.toml");
    std::fs::write(&config, "json = false\ncolumn = false\n").unwrap();
    let output = run_with_stdin(
        &root,
        &["--config", config.to_str().unwrap(), "--absolute-paths"],
        &message(Path::new("/x/a.dats"), "text"),
    );
    assert_eq!(stdout_of(&output), "/x/a.dats:167: text\n\n");
}

#[test]
fn test_invalid_config_is_an_error() {
    let (_dir, root) = workspace();
    std::fs::write(root.join("pats-filter.toml"), "colour = true\n").unwrap();
    let output = run_with_stdin(&root, &[], "line\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse config"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file_is_an_error() {
    let (_dir, root) = workspace();
    let output = Command::new(filter_bin())
        .arg("missing.log")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read missing.log"), "stderr: {}", stderr);
}
