use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dl, seed_base, seed_log, setup_test_db};

#[test]
fn test_status_all_pending_skips_weekend() {
    let db_path = setup_test_db("status_all_pending");
    seed_base(&db_path); // membership starts 2025-10-01

    // Oct 4–5 2025 is a weekend: 6 weekday dates remain, all pending.
    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
    ])
    .assert()
    .success()
    .stdout(contains("Completed: 0 | Pending: 6 | Total: 6"))
    .stdout(contains("Riya Sharma"))
    .stdout(contains("page 1/2"));
}

#[test]
fn test_status_weekend_rows_shown_on_request() {
    let db_path = setup_test_db("status_show_weekend");
    seed_base(&db_path);

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
        "--show-weekend-pending",
    ])
    .assert()
    .success()
    .stdout(contains("Completed: 0 | Pending: 8 | Total: 8"))
    .stdout(contains("Saturday, 10/04/2025"));
}

#[test]
fn test_status_counts_logged_dates_as_completed() {
    let db_path = setup_test_db("status_completed");
    seed_base(&db_path);

    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");
    seed_log(&db_path, "2025-10-03", "Bug triage", "1.5", "work");

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
    ])
    .assert()
    .success()
    .stdout(contains("Completed: 2 | Pending: 4 | Total: 6"));
}

#[test]
fn test_status_filter_completed_only() {
    let db_path = setup_test_db("status_filter");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
        "--filter",
        "completed",
    ])
    .assert()
    .success()
    .stdout(contains("Thursday, 10/02/2025"))
    .stdout(contains("Friday, 10/03/2025").not());
}

#[test]
fn test_status_pagination_clamps_page() {
    let db_path = setup_test_db("status_pagination");
    seed_base(&db_path);

    // 6 pending weekdays with page size 5 → 2 pages; page 2 holds the
    // oldest date. An absurd page number clamps to the last page.
    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
        "--page",
        "99",
    ])
    .assert()
    .success()
    .stdout(contains("page 2/2"))
    .stdout(contains("Wednesday, 10/01/2025"));
}

#[test]
fn test_status_details_lists_entries() {
    let db_path = setup_test_db("status_details");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");
    seed_log(&db_path, "2025-10-02", "Standup", "0.5", "meeting");

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
        "--filter",
        "completed",
        "--details",
    ])
    .assert()
    .success()
    .stdout(contains("API integration"))
    .stdout(contains("Standup"))
    .stdout(contains("total 2.5h"));
}

#[test]
fn test_status_warns_on_duplicate_day_records() {
    let db_path = setup_test_db("status_duplicates");
    seed_base(&db_path);

    // Bypass the write path to create the duplicate the aggregator must
    // tolerate: two raw timelog rows for the same date.
    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        let date = chrono::NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();

        for task in ["API integration", "Code review"] {
            let id = daylogger::db::queries::insert_timelog(&conn, 1, 1, date).expect("timelog");
            daylogger::db::queries::insert_entry(
                &conn,
                id,
                task,
                1.0,
                daylogger::models::entry_kind::EntryKind::Work,
                None,
            )
            .expect("entry");
        }
    }

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
    ])
    .assert()
    .success()
    .stdout(contains("Duplicate day-end logs merged for 2025-10-02"))
    .stdout(contains("Completed: 1 | Pending: 5 | Total: 6"));
}

#[test]
fn test_status_stops_at_membership_end() {
    let db_path = setup_test_db("status_membership_end");

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

    dl().args(["--db", &db_path, "project", "add", "Apollo"])
        .assert()
        .success();

    dl().args([
        "--db",
        &db_path,
        "member",
        "assign",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--start",
        "2025-10-01",
        "--end",
        "2025-10-03",
    ])
    .assert()
    .success();

    // Membership ended Oct 3: later dates accrue no pending logs.
    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--today",
        "2025-10-08",
    ])
    .assert()
    .success()
    .stdout(contains("Completed: 0 | Pending: 3 | Total: 3"));
}

#[test]
fn test_status_unknown_project_fails_loudly() {
    let db_path = setup_test_db("status_unknown_project");
    seed_base(&db_path);

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "riya@example.com",
        "--project",
        "Nonexistent",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown project"));
}
