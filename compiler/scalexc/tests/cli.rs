//! End-to-end tests of the `scalex` binary.
//!
//! Each test writes sources into a temporary directory and checks stdout,
//! stderr, and the exit status.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_sources(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let paths = files
        .iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            std::fs::write(&path, text).unwrap();
            path
        })
        .collect();
    (dir, paths)
}

// === Exit status ===

#[test]
fn check_clean_file_exits_zero() {
    let (_dir, paths) = write_sources(&[("ok.scx", "class A { def f(x) = x + 1 }\n")]);
    cargo_bin_cmd!("scalex")
        .arg("check")
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_lexical_error_exits_one() {
    let (_dir, paths) = write_sources(&[("bad.scx", "val s = x;\n")]);
    cargo_bin_cmd!("scalex")
        .args(["check", "--color=never"])
        .args(&paths)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("error[E0002]: unrecognized character `;`")
                .and(predicate::str::contains("bad.scx:1:10"))
                .and(predicate::str::contains("error: found 1 lexical error")),
        );
}

#[test]
fn missing_file_exits_two() {
    cargo_bin_cmd!("scalex")
        .args(["lex", "/no/such/file.scx"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read `/no/such/file.scx`"));
}

#[test]
fn usage_errors_exit_two_with_usage() {
    cargo_bin_cmd!("scalex")
        .args(["lex", "--format=xml", "a.scx"])
        .assert()
        .code(2)
        .stderr(
            predicate::str::contains("invalid value `xml` for `--format`")
                .and(predicate::str::contains("Usage: scalex")),
        );

    cargo_bin_cmd!("scalex")
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown command `frobnicate`"));
}

// === lex ===

#[test]
fn lex_prints_significant_tokens() {
    let (_dir, paths) = write_sources(&[("m.scx", "if (a <= b) c else d // done\n")]);
    cargo_bin_cmd!("scalex")
        .arg("lex")
        .args(&paths)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("LessOrEqual")
                .and(predicate::str::contains("Else"))
                .and(predicate::str::contains("EndOfInput"))
                .and(predicate::str::contains("Comment").not()),
        );
}

#[test]
fn lex_trivia_includes_comments() {
    let (_dir, paths) = write_sources(&[("m.scx", "a // done\n")]);
    cargo_bin_cmd!("scalex")
        .args(["lex", "--trivia"])
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment").and(predicate::str::contains("Whitespace")));
}

#[test]
fn lex_json_preserves_file_order_in_parallel() {
    let files: Vec<(String, String)> = (0..8)
        .map(|i| (format!("f{i}.scx"), format!("val v{i} = {i}\n")))
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, t)| (n.as_str(), t.as_str()))
        .collect();
    let (_dir, paths) = write_sources(&borrowed);

    let output = cargo_bin_cmd!("scalex")
        .args(["lex", "--format=json"])
        .args(&paths)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let positions: Vec<usize> = (0..8)
        .map(|i| stdout.find(&format!("f{i}.scx")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{stdout}");
}

#[test]
fn parallel_and_sequential_agree() {
    let (_dir, paths) = write_sources(&[
        ("a.scx", "object A { val x = 1 }"),
        ("b.scx", "trait B { def f() = this }"),
        ("c.scx", "/* never closed"),
    ]);
    let run = |extra: &[&str]| {
        cargo_bin_cmd!("scalex")
            .args(["lex", "--format=json"])
            .args(extra)
            .args(&paths)
            .output()
            .unwrap()
    };
    let parallel = run(&[]);
    let sequential = run(&["--no-parallel"]);
    assert_eq!(parallel.status.code(), Some(1));
    assert_eq!(parallel.stdout, sequential.stdout);
}

// === keywords, explain, help, version ===

#[test]
fn keywords_lists_the_table() {
    cargo_bin_cmd!("scalex")
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("implicit").and(predicate::str::contains("Yield")));
}

#[test]
fn explain_prints_docs() {
    cargo_bin_cmd!("scalex")
        .args(["explain", "e0001"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# E0001: Unterminated Block Comment"));

    cargo_bin_cmd!("scalex")
        .args(["explain", "E9999"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown error code `E9999`"));
}

#[test]
fn help_and_version() {
    cargo_bin_cmd!("scalex")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: scalex <command>"));

    cargo_bin_cmd!("scalex")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("scalex "));
}
