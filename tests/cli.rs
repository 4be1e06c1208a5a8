use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A data directory with instant logins and document processing
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"auth_delay_ms":0,"processing_delay_ms":0}"#,
    )
    .unwrap();
    dir
}

fn finbuddy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finbuddy").unwrap();
    cmd.env("FINBUDDY_DATA_DIR", dir.path())
        .env_remove("FINBUDDY_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn login(dir: &TempDir) {
    finbuddy(dir)
        .args(["login", "--email", "demo@finbuddy.com", "--password", "demo123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Demo User!"));
}

#[test]
fn test_gated_command_requires_login() {
    let dir = data_dir();

    finbuddy(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_rust_log_reports_failures() {
    let dir = data_dir();

    finbuddy(&dir)
        .env("RUST_LOG", "debug")
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application failed"));
}

#[test]
fn test_quiet_by_default() {
    let dir = data_dir();

    finbuddy(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application failed").not());
}

#[test]
fn test_login_unlocks_dashboard() {
    let dir = data_dir();
    login(&dir);

    assert!(dir.path().join("session.json").exists());

    finbuddy(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Demo User!"))
        .stdout(predicate::str::contains("Documents: 2 uploaded"));
}

#[test]
fn test_bad_login_is_rejected() {
    let dir = data_dir();

    finbuddy(&dir)
        .args(["login", "--email", "demo@finbuddy.com", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));

    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn test_password_from_environment() {
    let dir = data_dir();

    finbuddy(&dir)
        .env("FINBUDDY_PASSWORD", "password")
        .args(["login", "--email", "user@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, John Doe!"));
}

#[test]
fn test_whoami_and_logout() {
    let dir = data_dir();

    finbuddy(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));

    login(&dir);

    finbuddy(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo User <demo@finbuddy.com>"));

    finbuddy(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    finbuddy(&dir).arg("budget").arg("list").assert().failure();
}

#[test]
fn test_signup_starts_a_session() {
    let dir = data_dir();

    finbuddy(&dir)
        .args(["signup", "--name", "Asha", "--email", "asha@example.com"])
        .args(["--password", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Asha!"));

    finbuddy(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha <asha@example.com>"));
}

#[test]
fn test_tax_new_regime() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["tax", "--income", "1000000", "--regime", "new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹62,400.00"));
}

#[test]
fn test_tax_comparison_names_cheaper_regime() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["tax", "--income", "1000000", "--section-80c", "150000", "--compare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regime saves you"));
}

#[test]
fn test_sip_plan() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["sip", "-t", "300000", "-c", "150000", "-m", "12", "-r", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹12,160.00"))
        .stdout(predicate::str::contains("Suggested options for Low risk:"));
}

#[test]
fn test_sip_with_unreadable_months_is_due_at_once() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["sip", "-t", "300000", "-m", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 years 0 months"))
        .stdout(predicate::str::contains("Required monthly SIP: ₹300,000.00"));
}

#[test]
fn test_goal_with_unreadable_months_is_not_added() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["goal", "add", "Bike", "-t", "90000", "-m", "soon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing added"));
}

#[test]
fn test_expense_add_shows_updated_list() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["expense", "add", "450", "Team dinner", "-c", "Food", "-d", "2024-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team dinner"))
        .stdout(predicate::str::contains("Uber rides"));
}

#[test]
fn test_budget_overview_lists_alerts() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["budget", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget alerts"))
        .stdout(predicate::str::contains("Shopping"));
}

#[test]
fn test_document_upload_completes() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["doc", "upload", "march_bank_statement.pdf", "--size", "2048"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded march_bank_statement.pdf"))
        .stdout(predicate::str::contains("Processing..."));
}

#[test]
fn test_empty_upload_fails_processing() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["doc", "upload", "empty.pdf", "--size", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data could be extracted."));
}

#[test]
fn test_unknown_expense_removal_fails() {
    let dir = data_dir();
    login(&dir);

    finbuddy(&dir)
        .args(["expense", "remove", "exp-00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
