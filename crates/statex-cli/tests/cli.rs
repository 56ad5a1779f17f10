//! End-to-end tests for the statex binary, driven over plain-text inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const STATEMENT: &str = "\
STATE BANK OF INDIA
STATEMENT PERIOD: 01/04/2025 TO 30/06/2025
CUSTOMER ID: 884512
ACCOUNT NO: 123456789012
IFSC CODE: SBIN0001234
PAN: ABCDE1234F
MOBILE NO: 9876543210
EMAIL ID: RAVI@GMAIL.COM
OPENING BALANCE : 22.38(CR)
CLOSING BALANCE : 2,983.38(CR)
";

fn statex() -> Command {
    Command::cargo_bin("statex").unwrap()
}

#[test]
fn extract_single_field_from_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    fs::write(&input, STATEMENT).unwrap();

    statex()
        .args(["extract", "--field", "pan"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCDE1234F"));
}

#[test]
fn extract_unknown_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    fs::write(&input, STATEMENT).unwrap();

    statex()
        .args(["extract", "--field", "salary"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn extract_missing_input_fails() {
    statex()
        .args(["extract", "--field", "pan", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn profile_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    fs::write(&input, STATEMENT).unwrap();

    statex()
        .arg("profile")
        .arg(&input)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PAN:"))
        .stdout(predicate::str::contains("ABCDE1234F"))
        .stdout(predicate::str::contains("SBIN0001234"));
}

#[test]
fn profile_json_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    let output = dir.path().join("profile.json");
    fs::write(&input, STATEMENT).unwrap();

    statex()
        .arg("profile")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"customer_id\": \"884512\""));
}

#[test]
fn text_command_dumps_uppercased_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    fs::write(&input, "customer id: 884512\n").unwrap();

    statex()
        .arg("text")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("CUSTOMER ID: 884512"));
}

#[test]
fn config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statex.json");

    statex()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    statex()
        .args(["config", "show", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("min_text_length"));
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statex.json");
    fs::write(&path, "{}").unwrap();

    statex()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn batch_with_no_matches_fails() {
    statex()
        .args(["batch", "definitely-no-such-glob-*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}
