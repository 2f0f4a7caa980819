use std::fs;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_freight-scheduler"))
        .args(args)
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_missing_orders_file_fails_with_message() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &["--load-orders", "missing.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.json"), "stderr was: {}", stderr);
    assert!(!dir.path().join("schedule.json").exists());
}

#[test]
fn test_no_directive_fails_with_message() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("no directive"));
}

#[test]
fn test_add_then_display() {
    let dir = tempdir().unwrap();

    let added = run_in(&dir, &["--add-flight", "-d", "NYC", "-a", "LAX"]);
    assert!(added.status.success());
    assert!(dir.path().join("schedule.json").exists());

    let shown = run_in(&dir, &["--display-schedule"]);
    assert!(shown.status.success());
    assert_eq!(String::from_utf8(shown.stdout).unwrap(), "Flight: 1, departure: NYC, arrival: LAX, day: 1\n");
}

#[test]
fn test_orders_report_from_binary() {
    let dir = tempdir().unwrap();
    run_in(&dir, &["--add-flight", "-d", "NYC", "-a", "LAX"]);
    fs::write(dir.path().join("orders.json"), r#"{"O1": {"destination": "LAX"}, "O2": {"destination": "SFO"}}"#).unwrap();

    let output = run_in(&dir, &["--load-orders", "orders.json"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "order: O1, flightNumber: 1, departure: NYC, arrival: LAX, day: 1\n\
         order: O2, flightNumber: not scheduled\n"
    );
}
