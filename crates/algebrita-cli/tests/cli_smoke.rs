//! CLI binary smoke tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cmd() -> Command {
    Command::cargo_bin("algebrita").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("adjoint"))
        .stdout(predicate::str::contains("scale"));
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[test]
fn dims_reports_equality() {
    cmd()
        .args(["dims", "[1, 2]", "[3, 4]"])
        .assert()
        .success()
        .stdout("true\n");
    cmd()
        .args(["dims", "[1, 2]", "[1, 2, 3]"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn add_complex_vectors() {
    cmd()
        .args(["add", r#"["1+2i", 3]"#, r#"["i", "1+i"]"#])
        .assert()
        .success()
        .stdout("[1+3i, 4+1i]\n");
}

#[test]
fn add_mismatched_vectors_fails() {
    cmd()
        .args(["add", "[1, 2]", "[1, 2, 3]"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("do not have the same dimensions"));
}

#[test]
fn add_vector_to_matrix_fails() {
    cmd()
        .args(["add", "[1, 2]", "[[1, 2]]"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("vectors do not have the same dimensions"));
}

#[test]
fn neg_complex_vector() {
    cmd()
        .args(["neg", r#"["1+2i", 3]"#])
        .assert()
        .success()
        .stdout("[-1-2i, -3]\n");
}

#[test]
fn transpose_swaps_matrix_shape() {
    cmd()
        .args(["transpose", "[[1, 2, 3], [4, 5, 6]]"])
        .assert()
        .success()
        .stdout("[[1, 4],\n [2, 5],\n [3, 6]]\n");
}

#[test]
fn transpose_vector_is_unchanged() {
    cmd()
        .args(["transpose", r#"["1+1i", 2]"#])
        .assert()
        .success()
        .stdout("[1+1i, 2]\n");
}

#[test]
fn conj_flips_imaginary_parts() {
    cmd()
        .args(["conj", r#"["1+2i", "3-4i", 5]"#])
        .assert()
        .success()
        .stdout("[1-2i, 3+4i, 5]\n");
}

#[test]
fn operand_read_from_file() {
    let path = std::env::temp_dir().join(format!("algebrita-cli-{}.json", std::process::id()));
    fs::write(&path, r#"[1, "2i"]"#).unwrap();
    let arg = format!("@{}", path.display());

    cmd()
        .args(["add", arg.as_str(), arg.as_str()])
        .assert()
        .success()
        .stdout("[2, 4i]\n");

    fs::remove_file(&path).unwrap();
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_flag_enables_debug_logs() {
    cmd()
        .env_remove("RUST_LOG")
        .args(["-v", "neg", "[1]"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed vector with shape [1]"));
}

#[test]
fn rust_log_enables_trace_logs() {
    cmd()
        .env("RUST_LOG", "trace")
        .args(["neg", "[1]"])
        .assert()
        .success()
        .stderr(predicate::str::contains("negate: shape [1]"));
}

#[test]
fn quiet_by_default() {
    cmd()
        .env_remove("RUST_LOG")
        .args(["neg", "[1]"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn adjoint_matrix_json() {
    cmd()
        .args(["--json", "adjoint", r#"[["1+1i", 2], [3, "4-1i"]]"#])
        .assert()
        .success()
        .stdout("[[\"1-1i\",3.0],[2.0,\"4+1i\"]]\n");
}

#[test]
fn scale_by_negative_imaginary() {
    cmd()
        .args(["scale", "-i", r#"["1+1i"]"#])
        .assert()
        .success()
        .stdout("[1-1i]\n");
}

#[test]
fn invalid_operand_reports_error() {
    cmd()
        .args(["neg", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operand"));
}
