//! CLI integration tests
//!
//! Each test runs the `sipadi` binary against its own data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sipadi(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sipadi").unwrap();
    cmd.env("SIPADI_DATA_DIR", dir.path())
        .env_remove("SIPADI_PASSWORD")
        .env_remove("SIPADI_LOG");
    cmd
}

/// Register and log in `budi`
fn logged_in() -> TempDir {
    let dir = TempDir::new().unwrap();
    sipadi(&dir)
        .args(["register", "budi", "--password", "padi123"])
        .assert()
        .success();
    sipadi(&dir)
        .args(["login", "budi", "--password", "padi123"])
        .assert()
        .success();
    dir
}

const MAY: [&str; 4] = ["--start", "2024-05-01", "--end", "2024-05-31"];

#[test]
fn test_help_output() {
    let dir = TempDir::new().unwrap();
    sipadi(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("income"))
        .stdout(predicate::str::contains("expense"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();
    sipadi(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default settings written"));
    assert!(dir.path().join("config.json").exists());

    sipadi(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    sipadi(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date format:     %Y-%m-%d"));
}

#[test]
fn test_commands_need_login() {
    let dir = TempDir::new().unwrap();
    sipadi(&dir)
        .args(["income", "add", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    sipadi(&dir)
        .args(["report", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_register_login_whoami_logout() {
    let dir = logged_in();

    sipadi(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("budi"));

    sipadi(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out 'budi'"));

    sipadi(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_duplicate_register_and_wrong_password() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["register", "budi", "--password", "lain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    sipadi(&dir)
        .args(["login", "budi", "--password", "salah"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong username or password"));
}

#[test]
fn test_income_posts_balanced_journal() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "100000", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income"))
        .stdout(predicate::str::contains("Rp 100,000"));

    let journal = fs::read_to_string(dir.path().join("data").join("journal_budi.csv")).unwrap();
    assert_eq!(journal.lines().count(), 3);
    assert!(journal.contains("Cash"));
    assert!(journal.contains("Revenue"));

    sipadi(&dir)
        .args(["report", "journal"])
        .args(MAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash"))
        .stdout(predicate::str::contains("Revenue"));
}

#[test]
fn test_rejects_bad_input() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "-5000", "--date", "2024-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    sipadi(&dir)
        .args(["income", "add", "100.50", "--date", "2024-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no decimals"));

    sipadi(&dir)
        .args(["expense", "add", "5000", "-c", "Pupuk", "-i", "Ciherang"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a sub-category"));

    assert!(!dir.path().join("data").join("journal_budi.csv").exists());
}

#[test]
fn test_income_statement_and_balance_sheet() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "300000", "-m", "transfer", "-d", "2024-05-02"])
        .assert()
        .success();
    sipadi(&dir)
        .args(["expense", "add", "50000", "-c", "Pupuk", "-i", "Urea", "-m", "cash", "-d", "2024-05-03"])
        .assert()
        .success();

    sipadi(&dir)
        .args(["report", "income-statement"])
        .args(MAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Urea"))
        .stdout(predicate::str::contains("Rp 250,000"));

    sipadi(&dir)
        .args(["report", "balance-sheet"])
        .args(MAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank"))
        .stdout(predicate::str::contains("Warning").not());
}

#[test]
fn test_report_json_and_csv_output() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "100000", "-d", "2024-05-01"])
        .assert()
        .success();

    sipadi(&dir)
        .args(["report", "income-statement", "--format", "json"])
        .args(MAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"net_income\": 100000"));

    let out = dir.path().join("ledger.csv");
    sipadi(&dir)
        .args(["report", "ledger", "--format", "csv", "--output"])
        .arg(&out)
        .args(MAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.contains("Cash"));
    assert!(csv.contains("100000"));
}

#[test]
fn test_home_shows_all_time_totals() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "75000", "-d", "2023-01-15"])
        .assert()
        .success();

    sipadi(&dir)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("SiPadi: budi"))
        .stdout(predicate::str::contains("Rp 75,000"));
}

#[test]
fn test_repair_is_idempotent() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "100000", "-d", "2024-05-01"])
        .assert()
        .success();

    fs::remove_file(dir.path().join("data").join("journal_budi.csv")).unwrap();

    sipadi(&dir)
        .arg("repair")
        .assert()
        .success()
        .stdout(predicate::str::contains("Posted journal entries for 1 transaction(s)"));

    sipadi(&dir)
        .arg("repair")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to repair"));
}

#[test]
fn test_users_are_isolated() {
    let dir = logged_in();

    sipadi(&dir)
        .args(["income", "add", "100000", "-d", "2024-05-01"])
        .assert()
        .success();

    sipadi(&dir)
        .args(["register", "siti", "--password", "sawah"])
        .assert()
        .success();
    sipadi(&dir)
        .args(["login", "siti", "--password", "sawah"])
        .assert()
        .success();

    sipadi(&dir)
        .args(["report", "summary"])
        .args(MAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions"));
}
