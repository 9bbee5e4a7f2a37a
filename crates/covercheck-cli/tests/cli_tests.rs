//! End-to-end tests for the covercheck binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn covercheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("covercheck").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

/// Scenario book: BOND_A long T1 with cover, BOND_B naked short T0.
fn write_desk_files(dir: &Path) {
    fs::write(
        dir.join("cash_trades.csv"),
        "trade_id,book_time,settle_date,bond,side,qty\n\
         T000001,2025-06-13 08:00:00,2025-06-14,BOND_A,BUY,5000000\n\
         T000002,2025-06-13 08:01:00,2025-06-13,BOND_B,SELL,10000000\n",
    )
    .unwrap();
    fs::write(
        dir.join("repo_trades.csv"),
        "repo_id,book_time,settle_date,bond,cover_qty,status\n\
         R000001,2025-06-13 08:02:00,2025-06-14,BOND_A,2000000,OPEN\n\
         R000002,2025-06-13 08:03:00,2025-06-14,BOND_A,7000000,CLOSED\n",
    )
    .unwrap();
}

// =============================================================================
// INIT / GENERATE
// =============================================================================

#[test]
fn test_init_creates_header_files() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("desk");

    covercheck(&data).arg("init").assert().success();

    let cash = fs::read_to_string(data.join("cash_trades.csv")).unwrap();
    assert_eq!(cash.trim_end(), "trade_id,book_time,settle_date,bond,side,qty");
    assert!(data.join("repo_trades.csv").exists());
}

#[test]
fn test_init_refuses_to_truncate_without_force() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());

    covercheck(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    covercheck(dir.path()).args(["init", "--force"]).assert().success();
    let cash = fs::read_to_string(dir.path().join("cash_trades.csv")).unwrap();
    assert_eq!(cash.lines().count(), 1);
}

#[test]
fn test_generate_appends_rows() {
    let dir = TempDir::new().unwrap();

    covercheck(dir.path())
        .args(["generate", "--seed", "7", "--settle-date", "2025-06-14"])
        .assert()
        .success();
    covercheck(dir.path())
        .args(["generate", "--seed", "8", "--cash", "2", "--covers", "0"])
        .assert()
        .success();

    let cash = fs::read_to_string(dir.path().join("cash_trades.csv")).unwrap();
    let repo = fs::read_to_string(dir.path().join("repo_trades.csv")).unwrap();
    assert_eq!(cash.lines().count(), 6);
    assert_eq!(repo.lines().count(), 2);
    assert!(cash.contains("T000005"));
    assert!(repo.contains("R000001"));
}

#[test]
fn test_generate_rejects_bad_settle_date() {
    let dir = TempDir::new().unwrap();
    covercheck(dir.path())
        .args(["generate", "--settle-date", "14/06/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_simulate_short_run() {
    let dir = TempDir::new().unwrap();

    covercheck(dir.path())
        .args(["-q", "simulate", "--interval", "1", "--iterations", "2", "--seed", "3"])
        .assert()
        .success();

    let cash = fs::read_to_string(dir.path().join("cash_trades.csv")).unwrap();
    let repo = fs::read_to_string(dir.path().join("repo_trades.csv")).unwrap();
    assert_eq!(cash.lines().count(), 1 + 6);
    assert_eq!(repo.lines().count(), 1 + 1);
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_table() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());

    covercheck(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("NEW_COVER_NEEDED"))
        .stdout(predicate::str::contains("CLOSE_COVER"))
        .stdout(predicate::str::contains("Short 10000000 vs open cover 0"))
        .stdout(predicate::str::contains("10mm"));
}

#[test]
fn test_check_json_raw_quantities() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());

    let output = covercheck(dir.path())
        .args(["check", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let actions = report["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["action"], "NEW_COVER_NEEDED");
    assert_eq!(actions[0]["bond"], "BOND_B");
    assert_eq!(actions[0]["settlement_date"], "2025-06-13");
    assert_eq!(actions[0]["notional"], 10_000_000);
    assert_eq!(actions[1]["action"], "CLOSE_COVER");
    assert_eq!(report["summary"]["total_close_cover"], 2_000_000);
}

#[test]
fn test_check_empty_store() {
    let dir = TempDir::new().unwrap();
    covercheck(dir.path())
        .args(["-q", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."));
}

#[test]
fn test_check_malformed_record_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cash_trades.csv"),
        "trade_id,book_time,settle_date,bond,side,qty\n\
         T000001,2025-06-13 08:00:00,2025-06-14,BOND_A,SELL,lots\n",
    )
    .unwrap();

    covercheck(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("T000001"));
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[test]
fn test_dashboard_table() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());

    covercheck(dir.path())
        .args(["dashboard", "--as-of", "2025-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NetBreak_T1"))
        .stdout(predicate::str::contains(
            "Close cover T1: excess 2000000 (no short, cover 2000000)",
        ))
        .stdout(predicate::str::contains(
            "Need cover T0: missing 10000000 (short 10000000 vs cover 0)",
        ));
}

#[test]
fn test_dashboard_csv_flattens_horizons() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());

    let output = covercheck(dir.path())
        .args(["dashboard", "--as-of", "2025-06-13", "-f", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("as_of,bond,horizon,cash,cover,net_break,commentary")
    );
    assert_eq!(lines.count(), 6);
    assert!(text.contains("2025-06-13,BOND_A,1,5000000,2000000,-2000000,"));
}

#[test]
fn test_dashboard_config_horizons() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());
    let config = dir.path().join("covercheck.toml");
    fs::write(&config, "horizons = [0]\n").unwrap();

    let output = covercheck(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["dashboard", "--as-of", "2025-06-13", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = report["rows"].as_array().unwrap();
    // BOND_A only settles at T1, outside the window.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["bond"], "BOND_B");
    assert_eq!(rows[0]["positions"].as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["positions"][0]["net_break"], 10_000_000);
}

#[test]
fn test_dashboard_invalid_as_of() {
    let dir = TempDir::new().unwrap();
    write_desk_files(dir.path());

    covercheck(dir.path())
        .args(["dashboard", "--as-of", "2025-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid as-of date '2025-02-30'"));
}

#[test]
fn test_bad_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("covercheck.toml");
    fs::write(&config, "horizons = []\n").unwrap();

    covercheck(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
