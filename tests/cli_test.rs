use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_default_run_prints_fixed_sequence() {
    let mut cmd = Command::cargo_bin("small-levels").unwrap();
    cmd.assert().success().stdout("2\n3\n1\n1\n");
}

#[test]
fn test_flags_override_reported_values() {
    let mut cmd = Command::cargo_bin("small-levels").unwrap();
    cmd.args([
        "--initial-a",
        "10",
        "--initial-b",
        "20",
        "--revised-a",
        "30",
        "--revised-b",
        "40",
    ])
    .assert()
    .success()
    .stdout("10\n20\n30\n40\n");
}

#[test]
fn test_verbose_logging_stays_off_stdout() {
    let mut cmd = Command::cargo_bin("small-levels").unwrap();
    cmd.arg("--verbose")
        .assert()
        .success()
        .stdout("2\n3\n1\n1\n")
        .stderr(predicate::str::contains("Starting small-levels demo"));
}
