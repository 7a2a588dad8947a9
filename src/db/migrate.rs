use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `oplog` audit table exists.
fn ensure_oplog_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS oplog (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the core tables with the modern schema.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            is_admin    INTEGER NOT NULL DEFAULT 0,
            is_client   INTEGER NOT NULL DEFAULT 0,
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS projects (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            name           TEXT NOT NULL UNIQUE,
            description    TEXT NOT NULL DEFAULT '',
            is_active      INTEGER NOT NULL DEFAULT 1,
            client_user_id INTEGER REFERENCES users(id),
            created_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS project_members (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id            INTEGER NOT NULL REFERENCES users(id),
            project_id         INTEGER NOT NULL REFERENCES projects(id),
            role               TEXT NOT NULL DEFAULT 'member',
            requires_reporting INTEGER NOT NULL DEFAULT 1,
            start_date         TEXT NOT NULL,
            end_date           TEXT,
            created_at         TEXT NOT NULL,
            UNIQUE(user_id, project_id)
        );

        CREATE TABLE IF NOT EXISTS timelogs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL REFERENCES users(id),
            project_id  INTEGER NOT NULL REFERENCES projects(id),
            log_date    TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS timelog_entries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            timelog_id       INTEGER NOT NULL REFERENCES timelogs(id) ON DELETE CASCADE,
            task_description TEXT NOT NULL,
            time_taken_hours REAL NOT NULL,
            kind             TEXT NOT NULL CHECK(kind IN ('work','meeting','break')),
            feature_title    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_members_user ON project_members(user_id);
        CREATE INDEX IF NOT EXISTS idx_timelogs_member_date
            ON timelogs(user_id, project_id, log_date);
        CREATE INDEX IF NOT EXISTS idx_entries_timelog ON timelog_entries(timelog_id);
        "#,
    )?;
    Ok(())
}

/// Older databases stored day-end logs keyed only by `created_at`.
/// Add the explicit `log_date` column; legacy rows keep NULL and fall
/// back to the date portion of `created_at` at read time.
fn migrate_add_log_date(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "timelogs")? {
        return Ok(());
    }
    if column_exists(conn, "timelogs", "log_date")? {
        return Ok(());
    }

    warning("Adding 'log_date' column to timelogs table...");
    conn.execute_batch("ALTER TABLE timelogs ADD COLUMN log_date TEXT;")?;

    let _ = crate::db::log::oplog(
        conn,
        "migration_applied",
        "timelogs.log_date",
        "Added explicit log_date column",
    );
    Ok(())
}

/// Reporting used to be implicit for every member; make it explicit and
/// opt-out per membership.
fn migrate_add_requires_reporting(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "project_members")? {
        return Ok(());
    }
    if column_exists(conn, "project_members", "requires_reporting")? {
        return Ok(());
    }

    warning("Adding 'requires_reporting' column to project_members table...");
    conn.execute_batch(
        "ALTER TABLE project_members ADD COLUMN requires_reporting INTEGER NOT NULL DEFAULT 1;",
    )?;

    let _ = crate::db::log::oplog(
        conn,
        "migration_applied",
        "project_members.requires_reporting",
        "Added requires_reporting flag",
    );
    Ok(())
}

/// Run all pending migrations. Every step is idempotent, so this is safe
/// to call on every startup path that touches the database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_oplog_table(conn)?;
    migrate_add_log_date(conn)?;
    migrate_add_requires_reporting(conn)?;
    create_core_tables(conn)?;
    Ok(())
}
