use predicates::str::contains;

mod common;
use common::{dl, seed_base, seed_log, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // All core tables must exist after init
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in [
        "users",
        "projects",
        "project_members",
        "timelogs",
        "timelog_entries",
        "oplog",
    ] {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(found, 1, "missing table {}", table);
    }
}

#[test]
fn test_user_add_and_list() {
    let db_path = setup_test_db("user_add_list");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "--first-name",
        "Aman",
        "--last-name",
        "Verma",
        "--email",
        "aman@example.com",
        "--admin",
    ])
    .assert()
    .success()
    .stdout(contains("created"));

    dl().args(["--db", &db_path, "user", "list"])
        .assert()
        .success()
        .stdout(contains("Aman Verma"))
        .stdout(contains("aman@example.com"))
        .stdout(contains("admin"));
}

#[test]
fn test_duplicate_user_is_rejected() {
    let db_path = setup_test_db("user_duplicate");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for _ in 0..1 {
        dl().args([
            "--db",
            &db_path,
            "user",
            "add",
            "--first-name",
            "Aman",
            "--last-name",
            "Verma",
            "--email",
            "aman@example.com",
        ])
        .assert()
        .success();
    }

    dl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "--first-name",
        "Aman",
        "--last-name",
        "Verma",
        "--email",
        "aman@example.com",
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));
}

#[test]
fn test_deactivated_user_hidden_unless_all() {
    let db_path = setup_test_db("user_deactivate");
    seed_base(&db_path);

    dl().args(["--db", &db_path, "user", "deactivate", "riya@example.com"])
        .assert()
        .success();

    let active_only = dl()
        .args(["--db", &db_path, "user", "list"])
        .output()
        .expect("list users");
    assert!(active_only.status.success());
    assert!(
        !String::from_utf8_lossy(&active_only.stdout).contains("riya@example.com"),
        "deactivated user should be hidden by default"
    );

    dl().args(["--db", &db_path, "user", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("riya@example.com"));
}

#[test]
fn test_member_assign_requires_known_user_and_project() {
    let db_path = setup_test_db("member_unknown");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dl().args([
        "--db",
        &db_path,
        "member",
        "assign",
        "--user",
        "ghost@example.com",
        "--project",
        "Apollo",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown user"));
}

#[test]
fn test_member_list_shows_role_and_start() {
    let db_path = setup_test_db("member_list");
    seed_base(&db_path);

    dl().args(["--db", &db_path, "member", "list", "--project", "Apollo"])
        .assert()
        .success()
        .stdout(contains("Riya Sharma"))
        .stdout(contains("developer"))
        .stdout(contains("2025-10-01"));
}

#[test]
fn test_log_requires_membership() {
    let db_path = setup_test_db("log_no_membership");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dl().args([
        "--db",
        &db_path,
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
        &db_path,
        "project",
        "add",
        "Apollo",
    ])
    .assert()
    .success();

    dl().args([
        "--db",
        &db_path,
        "log",
        "2025-10-02",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--task",
        "API integration",
        "--hours",
        "2",
    ])
    .assert()
    .failure()
    .stderr(contains("not a member"));
}

#[test]
fn test_log_rejects_invalid_hours_and_kind() {
    let db_path = setup_test_db("log_invalid");
    seed_base(&db_path);

    dl().args([
        "--db",
        &db_path,
        "log",
        "2025-10-02",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--task",
        "Broken",
        "--hours",
        "0",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid hours"));

    dl().args([
        "--db",
        &db_path,
        "log",
        "2025-10-02",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--task",
        "Broken",
        "--hours",
        "2",
        "--kind",
        "holiday",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid entry kind"));
}

#[test]
fn test_second_entry_same_day_appends_to_existing_log() {
    let db_path = setup_test_db("log_append");
    seed_base(&db_path);

    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");
    seed_log(&db_path, "2025-10-02", "Standup", "0.5", "meeting");

    // Still one logical timelog row for the day
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let logs: i64 = conn
        .query_row("SELECT COUNT(*) FROM timelogs", [], |row| row.get(0))
        .expect("count timelogs");
    let entries: i64 = conn
        .query_row("SELECT COUNT(*) FROM timelog_entries", [], |row| row.get(0))
        .expect("count entries");

    assert_eq!(logs, 1);
    assert_eq!(entries, 2);
}

#[test]
fn test_oplog_records_operations() {
    let db_path = setup_test_db("oplog_print");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");

    dl().args(["--db", &db_path, "oplog", "--print"])
        .assert()
        .success()
        .stdout(contains("user_add"))
        .stdout(contains("project_add"))
        .stdout(contains("member_assign"))
        .stdout(contains("log_add"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    seed_base(&db_path);

    dl().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users"))
        .stdout(contains("Day-end logs"));

    dl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_copy");
    seed_base(&db_path);

    let dest = common::temp_out("backup_copy", "sqlite");

    dl().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
