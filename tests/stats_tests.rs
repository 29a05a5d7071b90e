use chrono::{Duration, Local};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, flog, init_db, setup};

#[test]
fn test_stats_empty_store() {
    let env = setup("stats_empty");
    init_db(&env);

    flog(&env)
        .args(["stats"])
        .assert()
        .success()
        .stdout(contains("No sessions logged yet"));
}

#[test]
fn test_stats_reflects_todays_session() {
    let env = setup("stats_today");
    init_db(&env);

    let today = Local::now().date_naive();
    add_session(
        &env,
        &today.format("%Y-%m-%d").to_string(),
        "09:00",
        "10:15",
        "Alpha",
    );

    flog(&env)
        .args(["stats"])
        .assert()
        .success()
        .stdout(contains("This week"))
        .stdout(contains("Total hours: 1.25 h"))
        .stdout(contains("Hours by project"))
        .stdout(contains("Alpha"));
}

#[test]
fn test_stats_daily_chart_spans_fourteen_days() {
    let env = setup("stats_window");
    init_db(&env);

    let today = Local::now().date_naive();
    add_session(
        &env,
        &today.format("%Y-%m-%d").to_string(),
        "09:00",
        "10:00",
        "Alpha",
    );

    let assert = flog(&env).args(["stats"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let first_day = today - Duration::days(13);
    assert!(output.contains(&today.format("%Y-%m-%d").to_string()));
    assert!(output.contains(&first_day.format("%Y-%m-%d").to_string()));
}

#[test]
fn test_old_sessions_stay_out_of_the_daily_window() {
    let env = setup("stats_old");
    init_db(&env);

    let old_day = Local::now().date_naive() - Duration::days(30);
    add_session(
        &env,
        &old_day.format("%Y-%m-%d").to_string(),
        "09:00",
        "17:00",
        "Archive",
    );

    let assert = flog(&env).args(["stats"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // outside the 14-day chart, but still present in the project breakdown
    assert!(!output.contains(&old_day.format("%Y-%m-%d").to_string()));
    assert!(output.contains("Archive"));
}

#[test]
fn test_stats_groups_projects_by_total_hours() {
    let env = setup("stats_projects");
    init_db(&env);

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    add_session(&env, &today, "09:00", "12:00", "Big"); // 3h
    add_session(&env, &today, "13:00", "14:00", "Small"); // 1h

    let assert = flog(&env)
        .args(["stats"])
        .assert()
        .success()
        .stdout(contains("Big").and(contains("Small")));

    // descending order: Big is rendered before Small
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let big_pos = output.find("Big").unwrap();
    let small_pos = output.find("Small").unwrap();
    assert!(big_pos < small_pos);
}
