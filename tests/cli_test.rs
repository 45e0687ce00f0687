use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_import_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.args(["--today", "2024-05-28", "import", "tests/fixtures/payments.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "id,name,email,status,plan,next_billing_date,billing_state",
        ))
        // Renewed from the 2024-05-31 payment
        .stdout(predicate::str::contains(
            "3,Carlos López,carlos@example.com,ACTIVE,Standard,2024-06-30,ACTIVE_OK",
        ))
        // Untouched, due in four days
        .stdout(predicate::str::contains(
            "1,Juan Pérez,juan@example.com,ACTIVE,Premium,2024-06-01,EXPIRING_SOON",
        ))
        .stdout(predicate::str::contains("Former Member").not());

    Ok(())
}

#[test]
fn test_cli_members_filter() {
    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.args(["--today", "2024-05-28", "members", "--status", "INACTIVE"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2,María García"))
        .stdout(predicate::str::contains("Juan").not())
        .stdout(predicate::str::contains("Administrador").not());
}

#[test]
fn test_cli_dashboard_report() {
    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.args(["--today", "2024-06-03", "dashboard"]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["totalMembers"], 3);
    assert_eq!(report["activeMembers"], 2);
    // Juan's 2024-06-01 renewal has passed.
    assert_eq!(report["overdue"][0]["id"], "1");
    assert_eq!(report["expiringSoon"].as_array().unwrap().len(), 0);
    assert_eq!(report["recentPayments"][0]["id"], "p4");
    assert_eq!(report["alerts"][0]["title"], "Pending payments");
    assert_eq!(report["alerts"][0]["level"], "error");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 overdue payments and 0 expiring soon."));
}

#[test]
fn test_cli_insights_and_classes() {
    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.args(["--today", "2024-05-28", "insights", "--show-context"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total members: 3"))
        .stdout(predicate::str::contains("2 of 3 members are active"));

    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.args(["--today", "2024-05-20", "classes", "--days", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2024-05-20 08:00 Crossfit WOD (Alex, High Intensity)"))
        .stdout(predicate::str::contains("2024-05-21 18:00 Zumba Party"));
}

#[test]
fn test_cli_classes_with_huge_window() {
    for days in ["200000000", "9223372036854775807"] {
        let mut cmd = Command::new(cargo_bin!("gymledger"));
        cmd.args(["--today", "2024-05-20", "classes", "--days", days]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("2024-05-20 08:00 Crossfit WOD"));
    }
}

#[test]
fn test_cli_rejects_bad_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"expiringWindowDays": -2}"#)?;

    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.arg("--config").arg(&path).arg("dashboard");
    cmd.assert().failure();

    std::fs::write(&path, r#"{"expiringWindowDays": 2}"#)?;
    let mut cmd = Command::new(cargo_bin!("gymledger"));
    cmd.args(["--today", "2024-05-28"])
        .arg("--config")
        .arg(&path)
        .arg("members");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2024-06-01,ACTIVE_OK"));
    Ok(())
}
