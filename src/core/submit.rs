use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use chrono::NaiveDate;

/// A task line being submitted for a day-end log.
pub struct NewEntry<'a> {
    pub task: &'a str,
    pub hours: f64,
    pub kind: EntryKind,
    pub feature: Option<&'a str>,
}

pub struct SubmitLogic;

impl SubmitLogic {
    /// Append one entry to the day-end log of (user, project, date).
    ///
    /// There is at most one logical timelog per (user, project, date):
    /// when a log for that date already exists the entry is attached to
    /// it, so the write path never produces duplicate day records.
    pub fn apply(
        pool: &mut DbPool,
        user_email: &str,
        project_name: &str,
        date: NaiveDate,
        entry: NewEntry<'_>,
    ) -> AppResult<()> {
        if !(entry.hours > 0.0 && entry.hours <= 24.0) {
            return Err(AppError::InvalidHours(format!(
                "{} (expected 0 < hours <= 24)",
                entry.hours
            )));
        }

        let user = queries::find_user_by_email(&pool.conn, user_email)?
            .ok_or_else(|| AppError::UnknownUser(user_email.to_string()))?;
        let project = queries::find_project_by_name(&pool.conn, project_name)?
            .ok_or_else(|| AppError::UnknownProject(project_name.to_string()))?;

        if queries::load_membership(&pool.conn, user.id, project.id)?.is_none() {
            return Err(AppError::NotAMember {
                user: user.email.clone(),
                project: project.name.clone(),
            });
        }

        let timelog_id = match queries::find_timelog_for_date(&pool.conn, user.id, project.id, date)?
        {
            Some(id) => id,
            None => queries::insert_timelog(&pool.conn, user.id, project.id, date)?,
        };

        queries::insert_entry(
            &pool.conn,
            timelog_id,
            entry.task,
            entry.hours,
            entry.kind,
            entry.feature,
        )?;

        let _ = log::oplog(
            &pool.conn,
            "log_add",
            &format!("{} / {}", user.email, project.name),
            &format!(
                "Logged {} {} on {}",
                crate::utils::fmt_hours(entry.hours),
                entry.kind.as_str(),
                date
            ),
        );

        Ok(())
    }
}
