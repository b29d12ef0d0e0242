use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn no_arguments_writes_default_trajectory_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .current_dir(dir.path())
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("trajectory_data.txt")).expect("output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10_000);
    assert_eq!(lines[0], "7071000 0 0");
    assert!(lines.iter().all(|l| l.split_whitespace().count() == 3));
}

#[test]
fn overrides_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("out/leo.txt");
    let summary = dir.path().join("out/leo.json");
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--output",
            output.to_str().unwrap(),
            "--steps",
            "120",
            "--dt",
            "5",
            "--summary",
            summary.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 120);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).unwrap()).expect("summary json");
    assert_eq!(json["steps"], 120);
    assert_eq!(json["time_step_s"], 5.0);
}

#[test]
fn config_file_is_honoured() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("run.toml");
    fs::write(&config, "steps = 42\naltitude_km = 400.0\nspeed_m_s = 7670.0\n").unwrap();
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("trajectory_data.txt")).unwrap();
    assert_eq!(text.lines().count(), 42);
    assert_eq!(text.lines().next(), Some("6771000 0 0"));
}

#[test]
fn stdout_output() {
    let assert = Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--output", "-", "--steps", "3"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.starts_with("7071000 0 0\n"));
}

#[test]
fn zero_time_step_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .current_dir(dir.path())
        .args(["--dt", "0"])
        .assert()
        .failure()
        .stderr(contains("time_step_s"));
    assert!(!dir.path().join("trajectory_data.txt").exists());
}

#[test]
fn unwritable_output_fails_loudly() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--output", dir.path().to_str().unwrap(), "--steps", "3"])
        .assert()
        .failure()
        .stderr(contains("failed to write"));
}
