use predicates::str::contains;
use std::fs;

mod common;
use common::{dl, seed_base, seed_log, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_completed_and_pending_rows() {
    let db_path = setup_test_db("export_csv");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2.5", "work");

    let out = temp_out("export_csv", "csv");

    dl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--range",
        "2025-10-01:2025-10-08",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.lines().next().unwrap_or("").contains("date"));
    assert!(content.contains("2025-10-02,completed,API integration,work,2.5"));
    assert!(content.contains("2025-10-03,pending"));
    // Weekend dates are omitted under the default policy.
    assert!(!content.contains("2025-10-04"));
}

#[test]
fn test_export_json_is_parseable() {
    let db_path = setup_test_db("export_json");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");

    let out = temp_out("export_json", "json");

    dl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--range",
        "2025-10-01:2025-10-08",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 6); // 5 pending weekdays + 1 completed entry
    assert!(
        rows.iter()
            .any(|r| r["status"] == "completed" && r["task"] == "API integration")
    );
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    let db_path = setup_test_db("export_binary");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");

    let xlsx = temp_out("export_binary", "xlsx");
    dl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "xlsx",
        "--file",
        &xlsx,
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--range",
        "2025-10",
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));
    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));

    let pdf = temp_out("export_binary", "pdf");
    dl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "pdf",
        "--file",
        &pdf,
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--range",
        "2025-10",
    ])
    .assert()
    .success()
    .stdout(contains("PDF export completed"));
    assert!(fs::metadata(&pdf).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    seed_base(&db_path);

    dl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative_out.csv",
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    seed_base(&db_path);
    seed_log(&db_path, "2025-10-02", "API integration", "2", "work");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "placeholder").expect("pre-existing file");

    // With --force the existing file is replaced without prompting.
    dl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--user",
        "riya@example.com",
        "--project",
        "Apollo",
        "--range",
        "2025-10",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("API integration"));
}
