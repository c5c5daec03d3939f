#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn timeoff_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("timeoff"));
    cmd.env("TIMEOFF_DATA_DIR", data_dir.as_os_str());
    cmd
}

#[test]
fn test_apply_edit_delete_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. Fresh store renders an empty history
    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No leave applications found."));

    // 2. Apply (lowercase type is accepted)
    timeoff_cmd(temp.path())
        .args([
            "apply", "--name", "Alice", "--type", "sick", "--from", "2024-01-10", "--to",
            "2024-01-10", "--reason", "flu",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Leave application recorded (1): Alice, Sick Leave",
        ));

    // The blob lands under the storage key, with the canonical field names
    let blob = fs::read_to_string(temp.path().join("leaveApplications.json")).unwrap();
    assert!(blob.contains("\"leaveType\": \"Sick\""));
    assert!(blob.contains("\"startDate\": \"2024-01-10\""));

    // 3. History shows the application with rendered dates
    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Alice")
                .and(predicate::str::contains("Sick Leave"))
                .and(predicate::str::contains("Jan 10, 2024"))
                .and(predicate::str::contains("(1 day)")),
        );

    // 4. Edit the reason in place
    timeoff_cmd(temp.path())
        .args(["edit", "1", "--reason", "migraine"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Leave application updated (1): Alice",
        ));

    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migraine"));

    // 5. Delete with --yes and the history is empty again
    timeoff_cmd(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Leave application removed (1): Alice",
        ));

    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No leave applications found."));
}

#[test]
fn test_aliases_and_multi_day_ranges() {
    let temp = TempDir::new().unwrap();

    timeoff_cmd(temp.path())
        .args([
            "a", "-n", "Bob", "-t", "Earned", "--from", "2024-03-04", "--to", "2024-03-08", "-r",
            "family trip",
        ])
        .assert()
        .success();

    timeoff_cmd(temp.path())
        .args(["ls"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Earned Leave")
                .and(predicate::str::contains("Mar 4, 2024 - Mar 8, 2024"))
                .and(predicate::str::contains("(5 days)")),
        );
}

#[test]
fn test_invalid_application_reports_field_errors() {
    let temp = TempDir::new().unwrap();

    timeoff_cmd(temp.path())
        .args([
            "apply", "--name", "  ", "--type", "Quarterly", "--from", "2024-01-10", "--to",
            "2024-01-09", "--reason", "x",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("The application was not saved:")
                .and(predicate::str::contains("name: Name cannot be empty"))
                .and(predicate::str::contains(
                    "leaveType: Leave type must be Sick, Casual or Earned",
                ))
                .and(predicate::str::contains(
                    "endDate: End date cannot be before start date",
                )),
        );

    // Nothing was persisted
    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No leave applications found."));
}

#[test]
fn test_dashboard_summarizes_applications() {
    let temp = TempDir::new().unwrap();

    // Bare invocation on a fresh store
    timeoff_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No leaves found."));

    for (name, leave_type) in [("Alice", "Sick"), ("Bob", "Casual")] {
        timeoff_cmd(temp.path())
            .args([
                "apply", "--name", name, "--type", leave_type, "--from", "2024-01-10", "--to",
                "2024-01-10", "--reason", "personal",
            ])
            .assert()
            .success();
    }

    timeoff_cmd(temp.path())
        .args(["home"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total leaves applied: 2")
                .and(predicate::str::contains("Recently applied leaves:"))
                .and(predicate::str::contains("Bob")),
        );

    // Bare invocation is the dashboard too
    timeoff_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total leaves applied: 2"));
}

#[test]
fn test_position_errors() {
    let temp = TempDir::new().unwrap();

    timeoff_cmd(temp.path())
        .args([
            "apply", "--name", "Alice", "--type", "Sick", "--from", "2024-01-10", "--to",
            "2024-01-10", "--reason", "flu",
        ])
        .assert()
        .success();

    timeoff_cmd(temp.path())
        .args(["delete", "3", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No leave application at position 3"));

    timeoff_cmd(temp.path())
        .args(["edit", "zero", "--reason", "late"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid position: zero"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let temp = TempDir::new().unwrap();

    timeoff_cmd(temp.path())
        .args([
            "apply", "--name", "Alice", "--type", "Sick", "--from", "2024-01-10", "--to",
            "2024-01-10", "--reason", "flu",
        ])
        .assert()
        .success();

    // Anything but Y keeps the record
    timeoff_cmd(temp.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    // Y confirms
    timeoff_cmd(temp.path())
        .args(["delete", "1"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Leave application removed (1): Alice",
        ));
}

#[test]
fn test_config_round_trip() {
    let temp = TempDir::new().unwrap();

    timeoff_cmd(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("recent-limit = 3")
                .and(predicate::str::contains("date-format = %b %-d, %Y")),
        );

    timeoff_cmd(temp.path())
        .args(["config", "recent-limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent-limit set to 5"));

    timeoff_cmd(temp.path())
        .args(["config", "recent-limit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    timeoff_cmd(temp.path())
        .args(["config", "paper-size", "A4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: paper-size"));
}

#[test]
fn test_date_format_config_changes_rendering() {
    let temp = TempDir::new().unwrap();

    timeoff_cmd(temp.path())
        .args([
            "apply", "--name", "Alice", "--type", "Casual", "--from", "2024-01-10", "--to",
            "2024-01-10", "--reason", "errand",
        ])
        .assert()
        .success();

    timeoff_cmd(temp.path())
        .args(["config", "date-format", "%Y-%m-%d"])
        .assert()
        .success();

    timeoff_cmd(temp.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-10"));
}
