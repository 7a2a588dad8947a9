use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Users", "users"),
        ("Projects", "projects"),
        ("Memberships", "project_members"),
        ("Day-end logs", "timelogs"),
        ("Log entries", "timelog_entries"),
    ] {
        let count: i64 = pool.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table),
            [],
            |row| row.get(0),
        )?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN, label, RESET, GREEN, count, RESET
        );
    }

    //
    // 3) LOGGED DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date(COALESCE(log_date, created_at)) FROM timelogs
             ORDER BY 1 ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date(COALESCE(log_date, created_at)) FROM timelogs
             ORDER BY 1 DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Logged date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES PER LOGGED DAY
    //
    let logged_days: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT date(COALESCE(log_date, created_at))) FROM timelogs",
        [],
        |row| row.get(0),
    )?;

    if logged_days > 0 {
        let entries: i64 =
            pool.conn
                .query_row("SELECT COUNT(*) FROM timelog_entries", [], |row| row.get(0))?;
        let avg = entries as f64 / logged_days as f64;
        println!("{}• Average entries/logged day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
