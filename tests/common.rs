#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Per-test sandbox: a private HOME (so the real config is never read), a
/// private database and a private timer state file.
pub struct TestEnv {
    pub home: PathBuf,
    pub db: String,
    pub timer: String,
}

pub fn setup(name: &str) -> TestEnv {
    let mut home = env::temp_dir();
    home.push(format!("focuslog_test_{name}"));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).unwrap();

    let db = home.join("test.sqlite").to_string_lossy().to_string();
    let timer = home.join("timer.yml").to_string_lossy().to_string();
    TestEnv { home, db, timer }
}

/// Command pre-wired to the sandbox.
pub fn flog(env: &TestEnv) -> Command {
    let mut cmd = cargo_bin_cmd!("focuslog");
    cmd.env("HOME", &env.home);
    cmd.env("APPDATA", &env.home);
    cmd.env_remove("FOCUSLOG_USER");
    cmd.env_remove("FOCUSLOG_PASSWORD");
    cmd.args(["--db", &env.db, "--timer-file", &env.timer]);
    cmd
}

/// Create a temporary output file path inside the sandbox
pub fn temp_out(env: &TestEnv, name: &str, ext: &str) -> String {
    let p = env.home.join(format!("{name}_out.{ext}"));
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}

/// Initialize the DB schema (test mode: no config file written)
pub fn init_db(env: &TestEnv) {
    flog(env).args(["--test", "init"]).assert().success();
}

/// Add one session via the CLI
pub fn add_session(env: &TestEnv, date: &str, start: &str, end: &str, project: &str) {
    flog(env)
        .args([
            "add", date, "--start", start, "--end", end, "--project", project,
        ])
        .assert()
        .success();
}

/// Write a config file selecting the in-memory backend into the sandbox HOME.
pub fn write_memory_config(env: &TestEnv) {
    let dir = env.home.join(".focuslog");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("focuslog.conf"),
        format!("backend: memory\ndatabase: {}\n", env.db),
    )
    .unwrap();
}

/// Write a config file carrying owner credentials into the sandbox HOME.
pub fn write_auth_config(env: &TestEnv) {
    let dir = env.home.join(".focuslog");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("focuslog.conf"),
        format!(
            "backend: sqlite\ndatabase: {}\nauth:\n  owner_user: owner\n  owner_pass: secret\n",
            env.db
        ),
    )
    .unwrap();
}
