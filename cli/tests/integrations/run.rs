use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SESSION: &str = "\
glob is I
prok is V
pish is X
tegj is L
glob glob Silver is 34 Credits
glob prok Gold is 57800 Credits
pish pish Iron is 3910 Credits
how much is pish tegj glob glob ?
how many Credits is glob prok Silver ?
how many Credits is glob prok Gold ?
how many Credits is glob prok Iron ?

how much wood could a woodchuck chuck if a woodchuck could chuck wood ?
";

fn session_file(temp_dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join("session.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_run_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = session_file(&temp_dir, SESSION);

    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("run").arg(&input);

    cmd.assert().success().stdout(
        "pish tegj glob glob is 42\n\
         glob prok Silver is 68.00 Credits\n\
         glob prok Gold is 57800.00 Credits\n\
         glob prok Iron is 782.00 Credits\n\
         I have no idea what you are talking about\n",
    );
}

#[test]
fn test_cli_run_stdin() {
    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("run")
        .write_stdin("glob is I\nhow much is glob glob ?\nhow much is yippy ?\n");

    cmd.assert()
        .success()
        .stdout("glob glob is 2\nI don't know what yippy is\n");
}

#[test]
fn test_cli_run_with_facts_table() {
    let temp_dir = TempDir::new().unwrap();
    let input = session_file(&temp_dir, SESSION);

    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("run").arg(&input).arg("--facts");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Word"))
        .stdout(predicate::str::contains("tegj"))
        .stdout(predicate::str::contains("Credits per unit"))
        .stdout(predicate::str::contains("195.50"))
        .stdout(predicate::str::contains("14450.00"));
}

#[test]
fn test_cli_run_with_json_facts() {
    let temp_dir = TempDir::new().unwrap();
    let input = session_file(&temp_dir, "glob is I\nglob glob Silver is 34 Credits\n");

    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("run").arg(&input).arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"symbols\""))
        .stdout(predicate::str::contains("\"word\": \"glob\""))
        .stdout(predicate::str::contains("\"metal\": \"Silver\""));
}

#[test]
fn test_cli_run_invalid_numeral_fails_with_line_number() {
    let temp_dir = TempDir::new().unwrap();
    let input = session_file(&temp_dir, "glob is I\nhow much is glob glob glob glob ?\n");

    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("run").arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("IIII is not a valid roman numeral number"));
}

#[test]
fn test_cli_run_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("run").arg(temp_dir.path().join("nope.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("repl"));
}
