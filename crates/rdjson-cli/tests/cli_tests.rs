//! Integration tests for the `rdjson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the parse, tokens,
//! and check subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, error reporting, and exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: absolute path to a file under tests/fixtures.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn rdjson() -> Command {
    Command::cargo_bin("rdjson").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_stdin_to_stdout() {
    let output = rdjson()
        .arg("parse")
        .write_stdin(r#"{"b":[true,false,null],"a":1}"#)
        .output()
        .expect("parse should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("output should be UTF-8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("output is valid JSON");
    assert_eq!(json, serde_json::json!({"b": [true, false, null], "a": 1}));

    // Document order survives, not sorted order.
    assert!(stdout.find("\"b\"").unwrap() < stdout.find("\"a\"").unwrap());
}

#[test]
fn parse_file_to_stdout() {
    rdjson()
        .args(["parse", "-i", &fixture("pass1.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Widget\""))
        .stdout(predicate::str::contains("\"price\": 12.5"));
}

#[test]
fn parse_file_to_file() {
    let output_path = std::env::temp_dir().join(format!("rdjson-cli-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&output_path);

    rdjson()
        .args(["parse", "-i", &fixture("pass1.json"), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let written: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(fixture("pass1.json")).unwrap()).unwrap();
    assert_eq!(written, original);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn parse_empty_input_prints_null() {
    rdjson()
        .arg("parse")
        .write_stdin("")
        .assert()
        .success()
        .stdout("null\n")
        .stderr(predicate::str::contains("input is empty"));
}

#[test]
fn parse_syntax_error_fails_with_position() {
    rdjson()
        .arg("parse")
        .write_stdin("[1, 2,]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"))
        .stderr(predicate::str::contains(
            "unexpected ']' at row 1, column 7, expected a value",
        ));
}

#[test]
fn parse_character_error_fails_with_position() {
    rdjson()
        .args(["parse", "-i", &fixture("fail3.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid character 't' at row 3, column 6",
        ));
}

#[test]
fn parse_missing_file_fails() {
    rdjson()
        .args(["parse", "-i", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn parse_respects_max_depth() {
    rdjson()
        .args(["parse", "-i", &fixture("pass2.json")])
        .assert()
        .success();

    rdjson()
        .args(["parse", "--max-depth", "5", "-i", &fixture("pass2.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "nesting deeper than 5 levels at row 1, column 6",
        ));
}

#[test]
fn parse_rejects_max_depth_outside_supported_range() {
    for depth in ["0", "513", "1000000"] {
        rdjson()
            .args(["parse", "--max-depth", depth])
            .write_stdin("[]")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--max-depth"));
    }
}

#[test]
fn parse_deep_input_at_highest_limit_reports_error() {
    rdjson()
        .args(["parse", "--max-depth", "512"])
        .write_stdin("[".repeat(100_000))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "nesting deeper than 512 levels at row 1, column 513",
        ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokens subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tokens_prints_positions_and_kinds() {
    rdjson()
        .arg("tokens")
        .write_stdin("[1,\n \"a\"]")
        .assert()
        .success()
        .stdout(
            "1:1\t'['\n\
             1:2\tnumber 1\n\
             1:3\t','\n\
             2:2\tstring \"a\"\n\
             2:5\t']'\n\
             2:6\tend of input\n",
        );
}

#[test]
fn tokens_does_not_check_grammar() {
    rdjson()
        .arg("tokens")
        .write_stdin("] : [")
        .assert()
        .success()
        .stdout(predicate::str::contains("1:3\t':'"));
}

#[test]
fn tokens_reports_lexer_errors() {
    rdjson()
        .arg("tokens")
        .write_stdin("[01]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to tokenize JSON"))
        .stderr(predicate::str::contains("invalid character '1' at row 1, column 3"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_passing_files() {
    rdjson()
        .args(["check", &fixture("pass1.json"), &fixture("pass2.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok    "))
        .stdout(predicate::str::contains(
            "2 file(s) checked, 2 as expected, 0 unexpected",
        ));
}

#[test]
fn check_reports_failing_file() {
    rdjson()
        .args(["check", &fixture("pass1.json"), &fixture("fail1.json")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL  "))
        .stdout(predicate::str::contains("fail1.json (unexpected ']'"))
        .stdout(predicate::str::contains(
            "2 file(s) checked, 1 as expected, 1 unexpected",
        ));
}

#[test]
fn check_expect_fail_accepts_rejected_files() {
    rdjson()
        .args([
            "check",
            "--expect-fail",
            &fixture("fail1.json"),
            &fixture("fail2.json"),
            &fixture("fail3.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3 file(s) checked, 3 as expected, 0 unexpected",
        ));
}

#[test]
fn check_expect_fail_flags_accepted_files() {
    rdjson()
        .args(["check", "--expect-fail", &fixture("pass1.json")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("(parsed, expected an error)"));
}

#[test]
fn check_missing_file_is_a_failure() {
    rdjson()
        .args(["check", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed to read /definitely/not/here.json"));
}

#[test]
fn check_requires_files() {
    rdjson().arg("check").assert().failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge cases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    rdjson()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn unknown_subcommand_fails() {
    rdjson()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    rdjson()
        .args(["-vv", "parse"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("[]\n");
}
