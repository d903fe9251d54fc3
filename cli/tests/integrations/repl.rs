use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_repl_answers_piped_lines() {
    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("repl")
        .write_stdin("glob is I\nprok is V\nhow much is glob prok ?\nSausages\n");

    cmd.assert()
        .success()
        .stdout("glob prok is 4\nI have no idea what you are talking about\n");
}

#[test]
fn test_repl_keeps_going_after_invalid_numeral() {
    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("repl")
        .write_stdin("glob is I\nhow much is glob glob glob glob ?\nhow much is glob ?\n");

    cmd.assert()
        .success()
        .stdout("glob is 1\n")
        .stderr(predicate::str::contains("not a valid roman numeral number"));
}

#[test]
fn test_repl_facts_and_quit() {
    let mut cmd = Command::cargo_bin("merchant").unwrap();
    cmd.arg("repl")
        .write_stdin("glob is I\n:facts\n:quit\nhow much is glob ?\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("glob"))
        .stdout(predicate::str::contains("Symbol"))
        .stdout(predicate::str::contains("glob is 1").not());
}
