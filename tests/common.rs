#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("daylogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daylogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and seed one user, one project and one membership
/// starting 2025-10-01. Useful base for most reconciliation tests.
pub fn seed_base(db_path: &str) {
    // init DB (creates tables)
    dl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dl().args([
        "--db",
        db_path,
        "user",
        "add",
        "--first-name",
        "Riya",
        "--last-name",
        "Sharma",
        "--email",
        "riya@example.com",
    ])
    .assert()
    .success();

    dl().args([
        "--db",
        db_path,
        "project",
        "add",
        "Apollo",
        "--description",
        "Client portal rebuild",
    ])
    .assert()
    .success();

    dl().args([
        "--db",
        db_path,
        "member",
        "assign",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--role",
        "developer",
        "--start",
        "2025-10-01",
    ])
    .assert()
    .success();
}

/// Submit one day-end entry through the CLI.
pub fn seed_log(db_path: &str, date: &str, task: &str, hours: &str, kind: &str) {
    dl().args([
        "--db", db_path, "log", date, "--user", "riya@example.com", "--project", "Apollo",
        "--task", task, "--hours", hours, "--kind", kind,
    ])
    .assert()
    .success();
}
