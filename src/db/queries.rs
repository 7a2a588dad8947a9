use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::membership::ProjectMember;
use crate::models::project::Project;
use crate::models::timelog::{Timelog, TimelogEntry};
use crate::models::user::User;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

fn now_str() -> String {
    Local::now().naive_local().format(DATETIME_FMT).to_string()
}

fn parse_db_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn parse_db_datetime(s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

pub fn map_user_row(row: &Row) -> rusqlite::Result<User> {
    let created_at: String = row.get("created_at")?;

    Ok(User {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        is_admin: row.get::<_, i64>("is_admin")? == 1,
        is_client: row.get::<_, i64>("is_client")? == 1,
        is_active: row.get::<_, i64>("is_active")? == 1,
        created_at: parse_db_datetime(&created_at)?,
    })
}

pub fn insert_user(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    email: &str,
    is_admin: bool,
    is_client: bool,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (first_name, last_name, email, is_admin, is_client, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
        params![
            first_name,
            last_name,
            email,
            is_admin as i64,
            is_client as i64,
            now_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE email = ?1")?;
    Ok(stmt.query_row([email], map_user_row).optional()?)
}

pub fn load_users(conn: &Connection, include_inactive: bool) -> AppResult<Vec<User>> {
    let sql = if include_inactive {
        "SELECT * FROM users ORDER BY last_name ASC, first_name ASC"
    } else {
        "SELECT * FROM users WHERE is_active = 1 ORDER BY last_name ASC, first_name ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn deactivate_user(conn: &Connection, user_id: i64) -> AppResult<()> {
    conn.execute("UPDATE users SET is_active = 0 WHERE id = ?1", [user_id])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub fn map_project_row(row: &Row) -> rusqlite::Result<Project> {
    let created_at: String = row.get("created_at")?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
        client_user_id: row.get("client_user_id")?,
        created_at: parse_db_datetime(&created_at)?,
    })
}

pub fn insert_project(
    conn: &Connection,
    name: &str,
    description: &str,
    client_user_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO projects (name, description, is_active, client_user_id, created_at)
         VALUES (?1, ?2, 1, ?3, ?4)",
        params![name, description, client_user_id, now_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_project_by_name(conn: &Connection, name: &str) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare("SELECT * FROM projects WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_project_row).optional()?)
}

pub fn load_projects(conn: &Connection, include_inactive: bool) -> AppResult<Vec<Project>> {
    let sql = if include_inactive {
        "SELECT * FROM projects ORDER BY name ASC"
    } else {
        "SELECT * FROM projects WHERE is_active = 1 ORDER BY name ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_project_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn close_project(conn: &Connection, project_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE projects SET is_active = 0 WHERE id = ?1",
        [project_id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// project members
// ---------------------------------------------------------------------------

fn parse_optional_db_date(s: Option<String>) -> rusqlite::Result<Option<NaiveDate>> {
    match s {
        Some(s) => Ok(Some(parse_db_date(&s)?)),
        None => Ok(None),
    }
}

pub fn map_member_row(row: &Row) -> rusqlite::Result<ProjectMember> {
    let start_date: String = row.get("start_date")?;
    let end_date: Option<String> = row.get("end_date")?;
    let created_at: String = row.get("created_at")?;

    Ok(ProjectMember {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        project_id: row.get("project_id")?,
        role: row.get("role")?,
        requires_reporting: row.get::<_, i64>("requires_reporting")? == 1,
        start_date: parse_db_date(&start_date)?,
        end_date: parse_optional_db_date(end_date)?,
        created_at: parse_db_datetime(&created_at)?,
    })
}

pub fn insert_member(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
    role: &str,
    requires_reporting: bool,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO project_members (user_id, project_id, role, requires_reporting, start_date, end_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            project_id,
            role,
            requires_reporting as i64,
            start_date.format(DATE_FMT).to_string(),
            end_date.map(|d| d.format(DATE_FMT).to_string()),
            now_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_membership(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
) -> AppResult<Option<ProjectMember>> {
    let mut stmt =
        conn.prepare("SELECT * FROM project_members WHERE user_id = ?1 AND project_id = ?2")?;
    Ok(stmt
        .query_row(params![user_id, project_id], map_member_row)
        .optional()?)
}

/// Members of a project together with their user records, for the
/// `member list` view.
pub fn load_project_members(
    conn: &Connection,
    project_id: i64,
) -> AppResult<Vec<(ProjectMember, User)>> {
    let mut stmt = conn.prepare(
        "SELECT m.id, m.user_id, m.project_id, m.role, m.requires_reporting,
                m.start_date, m.end_date, m.created_at,
                u.id AS u_id, u.first_name, u.last_name, u.email,
                u.is_admin, u.is_client, u.is_active, u.created_at AS u_created_at
         FROM project_members m
         JOIN users u ON u.id = m.user_id
         WHERE m.project_id = ?1
         ORDER BY u.last_name ASC, u.first_name ASC",
    )?;

    let rows = stmt.query_map([project_id], |row| {
        let member = ProjectMember {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            project_id: row.get("project_id")?,
            role: row.get("role")?,
            requires_reporting: row.get::<_, i64>("requires_reporting")? == 1,
            start_date: parse_db_date(&row.get::<_, String>("start_date")?)?,
            end_date: parse_optional_db_date(row.get("end_date")?)?,
            created_at: parse_db_datetime(&row.get::<_, String>("created_at")?)?,
        };
        let user = User {
            id: row.get("u_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            is_admin: row.get::<_, i64>("is_admin")? == 1,
            is_client: row.get::<_, i64>("is_client")? == 1,
            is_active: row.get::<_, i64>("is_active")? == 1,
            created_at: parse_db_datetime(&row.get::<_, String>("u_created_at")?)?,
        };
        Ok((member, user))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every membership of a user that still requires day-end reporting,
/// restricted to active projects. Feeds the pending-log reminder view.
pub fn load_reporting_memberships(
    conn: &Connection,
    user_id: i64,
) -> AppResult<Vec<(ProjectMember, Project)>> {
    let mut stmt = conn.prepare(
        "SELECT m.id, m.user_id, m.project_id, m.role, m.requires_reporting,
                m.start_date, m.end_date, m.created_at,
                p.id AS p_id, p.name, p.description, p.is_active,
                p.client_user_id, p.created_at AS p_created_at
         FROM project_members m
         JOIN projects p ON p.id = m.project_id
         WHERE m.user_id = ?1 AND m.requires_reporting = 1 AND p.is_active = 1
         ORDER BY p.name ASC",
    )?;

    let rows = stmt.query_map([user_id], |row| {
        let member = ProjectMember {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            project_id: row.get("project_id")?,
            role: row.get("role")?,
            requires_reporting: row.get::<_, i64>("requires_reporting")? == 1,
            start_date: parse_db_date(&row.get::<_, String>("start_date")?)?,
            end_date: parse_optional_db_date(row.get("end_date")?)?,
            created_at: parse_db_datetime(&row.get::<_, String>("created_at")?)?,
        };
        let project = Project {
            id: row.get("p_id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            is_active: row.get::<_, i64>("is_active")? == 1,
            client_user_id: row.get("client_user_id")?,
            created_at: parse_db_datetime(&row.get::<_, String>("p_created_at")?)?,
        };
        Ok((member, project))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// timelogs
// ---------------------------------------------------------------------------

/// The day's existing log row for (user, project, date), earliest
/// submission first when legacy duplicates exist.
pub fn find_timelog_for_date(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
    date: NaiveDate,
) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM timelogs
         WHERE user_id = ?1 AND project_id = ?2
           AND date(COALESCE(log_date, created_at)) = ?3
         ORDER BY created_at ASC
         LIMIT 1",
    )?;

    Ok(stmt
        .query_row(
            params![user_id, project_id, date.format(DATE_FMT).to_string()],
            |row| row.get(0),
        )
        .optional()?)
}

pub fn insert_timelog(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
    date: NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timelogs (user_id, project_id, log_date, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user_id,
            project_id,
            date.format(DATE_FMT).to_string(),
            now_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_entry(
    conn: &Connection,
    timelog_id: i64,
    task_description: &str,
    time_taken_hours: f64,
    kind: EntryKind,
    feature_title: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timelog_entries (timelog_id, task_description, time_taken_hours, kind, feature_title)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            timelog_id,
            task_description,
            time_taken_hours,
            kind.to_db_str(),
            feature_title,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Raw day-end logs for a member within `[start, end]`, entries included.
/// The window is matched against the logical log date, so legacy rows
/// without `log_date` are bounded by their submission date.
pub fn load_timelogs_for_member(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Timelog>> {
    let mut stmt = conn.prepare(
        "SELECT t.id AS t_id, t.log_date, t.created_at,
                e.id AS e_id, e.task_description, e.time_taken_hours, e.kind, e.feature_title
         FROM timelogs t
         LEFT JOIN timelog_entries e ON e.timelog_id = t.id
         WHERE t.user_id = ?1 AND t.project_id = ?2
           AND date(COALESCE(t.log_date, t.created_at)) BETWEEN ?3 AND ?4
         ORDER BY t.id ASC, e.id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            project_id,
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string(),
        ],
        |row| {
            let t_id: i64 = row.get("t_id")?;
            let log_date: Option<String> = row.get("log_date")?;
            let created_at: String = row.get("created_at")?;

            let log_date = match log_date {
                Some(s) => Some(parse_db_date(&s)?),
                None => None,
            };
            let created_at = parse_db_datetime(&created_at)?;

            let entry = match row.get::<_, Option<i64>>("e_id")? {
                Some(e_id) => {
                    let kind_str: String = row.get("kind")?;
                    let kind = EntryKind::from_db_str(&kind_str).ok_or_else(|| {
                        rusqlite::Error::FromSqlConversionFailure(
                            0,
                            rusqlite::types::Type::Text,
                            Box::new(AppError::InvalidEntryKind(kind_str.clone())),
                        )
                    })?;

                    Some(TimelogEntry {
                        id: e_id,
                        task_description: row.get("task_description")?,
                        time_taken_hours: row.get("time_taken_hours")?,
                        kind,
                        feature_title: row.get("feature_title")?,
                    })
                }
                None => None,
            };

            Ok((t_id, log_date, created_at, entry))
        },
    )?;

    // Fold the joined rows back into one Timelog per parent record.
    let mut out: Vec<Timelog> = Vec::new();
    for r in rows {
        let (t_id, log_date, created_at, entry) = r?;

        if out.last().map(|t| t.id) != Some(t_id) {
            out.push(Timelog {
                id: t_id,
                user_id,
                project_id,
                log_date,
                created_at,
                entries: Vec::new(),
            });
        }

        if let Some(e) = entry
            && let Some(current) = out.last_mut()
        {
            current.entries.push(e);
        }
    }

    Ok(out)
}
