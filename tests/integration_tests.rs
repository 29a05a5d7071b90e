use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, flog, init_db, setup};

#[test]
fn test_init_creates_database() {
    let env = setup("init");

    flog(&env)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&env.db).exists());
}

#[test]
fn test_add_echoes_computed_duration() {
    let env = setup("add_duration");
    init_db(&env);

    flog(&env)
        .args([
            "add",
            "2024-01-01",
            "--start",
            "09:00",
            "--end",
            "10:15",
            "--project",
            "Personal",
        ])
        .assert()
        .success()
        .stdout(contains("1.2500"));
}

#[test]
fn test_add_overnight_session_rolls_over() {
    let env = setup("add_overnight");
    init_db(&env);

    // 22:00 -> 00:30 next day = 2.5 hours
    flog(&env)
        .args(["add", "2024-01-01", "--start", "22:00", "--end", "00:30"])
        .assert()
        .success()
        .stdout(contains("2.5000"));
}

#[test]
fn test_add_rejects_bad_date_and_time() {
    let env = setup("add_invalid");
    init_db(&env);

    flog(&env)
        .args(["add", "01/01/2024", "--start", "09:00", "--end", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    flog(&env)
        .args(["add", "2024-01-01", "--start", "9 am", "--end", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_add_rejects_out_of_range_focus() {
    let env = setup("add_focus");
    init_db(&env);

    flog(&env)
        .args([
            "add",
            "2024-01-01",
            "--start",
            "09:00",
            "--end",
            "10:00",
            "--focus",
            "7",
        ])
        .assert()
        .failure()
        .stderr(contains("focus"));
}

#[test]
fn test_list_shows_added_sessions() {
    let env = setup("list_all");
    init_db(&env);

    add_session(&env, "2025-08-31", "09:00", "17:00", "Alpha");
    add_session(&env, "2025-09-15", "09:00", "12:00", "Beta");

    flog(&env)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("2025-08-31"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Alpha"))
        .stdout(contains("Beta"))
        .stdout(contains("2 session(s)"));
}

#[test]
fn test_list_filters_by_period_range() {
    let env = setup("list_period");
    init_db(&env);

    add_session(&env, "2024-09-10", "09:00", "10:00", "Old");
    add_session(&env, "2025-08-31", "09:00", "10:00", "Mid");
    add_session(&env, "2025-09-15", "09:00", "10:00", "New");

    flog(&env)
        .args(["list", "--period", "2025-08:2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-08-31"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("2024-09-10").not());
}

#[test]
fn test_list_filters_by_project() {
    let env = setup("list_project");
    init_db(&env);

    add_session(&env, "2025-01-10", "09:00", "10:00", "Alpha");
    add_session(&env, "2025-01-11", "09:00", "10:00", "Beta");

    flog(&env)
        .args(["list", "--project", "Alpha"])
        .assert()
        .success()
        .stdout(contains("Alpha"))
        .stdout(contains("Beta").not());
}

#[test]
fn test_list_rejects_malformed_period() {
    let env = setup("list_bad_period");
    init_db(&env);

    flog(&env)
        .args(["list", "--period", "next-week"])
        .assert()
        .failure()
        .stderr(contains("Invalid"));
}

#[test]
fn test_guest_mode_warns_and_saves_nothing() {
    let env = setup("guest");
    init_db(&env);

    flog(&env)
        .args(["--guest", "add", "2024-01-01", "--start", "09:00", "--end", "10:00"])
        .assert()
        .success()
        .stdout(contains("Guest mode"));

    // the guest session died with the process; the database stayed empty
    flog(&env)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No sessions logged yet"));
}

#[test]
fn test_auth_gate_blocks_without_credentials() {
    let env = setup("auth_block");
    init_db(&env);
    common::write_auth_config(&env);

    flog(&env)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Authentication failed"));
}

#[test]
fn test_auth_gate_rejects_wrong_password() {
    let env = setup("auth_wrong");
    init_db(&env);
    common::write_auth_config(&env);

    flog(&env)
        .args(["--user", "owner", "--password", "nope", "list"])
        .assert()
        .failure()
        .stderr(contains("invalid credentials"));
}

#[test]
fn test_auth_gate_admits_owner() {
    let env = setup("auth_ok");
    init_db(&env);
    common::write_auth_config(&env);

    flog(&env)
        .args(["--user", "owner", "--password", "secret", "list"])
        .assert()
        .success()
        .stdout(contains("No sessions logged yet"));
}

#[test]
fn test_auth_gate_admits_guest_without_credentials() {
    let env = setup("auth_guest");
    common::write_auth_config(&env);

    flog(&env)
        .args(["--guest", "list"])
        .assert()
        .success()
        .stdout(contains("Guest mode"));
}

#[test]
fn test_db_info_reports_sessions() {
    let env = setup("db_info");
    init_db(&env);
    add_session(&env, "2025-01-10", "09:00", "17:00", "Alpha");

    flog(&env)
        .args(["db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total sessions"))
        .stdout(contains("2025-01-10"));
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let env = setup("db_check");
    init_db(&env);

    flog(&env)
        .args(["db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_log_print_requires_the_sqlite_backend() {
    let env = setup("log_memory_backend");
    common::write_memory_config(&env);

    flog(&env)
        .args(["log", "--print"])
        .assert()
        .failure()
        .stderr(contains("SQLite"));

    // no database file appears as a side effect
    assert!(!std::path::Path::new(&env.db).exists());
}

#[test]
fn test_db_diagnostics_require_the_sqlite_backend() {
    let env = setup("db_memory_backend");
    common::write_memory_config(&env);

    flog(&env)
        .args(["db", "--info"])
        .assert()
        .failure()
        .stderr(contains("SQLite"));

    assert!(!std::path::Path::new(&env.db).exists());
}

#[test]
fn test_internal_log_records_operations() {
    let env = setup("audit_log");
    init_db(&env);
    add_session(&env, "2025-01-10", "09:00", "10:00", "Alpha");

    flog(&env)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("[add]"));
}
