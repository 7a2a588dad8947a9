use super::entry_kind::EntryKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Single task line inside a day-end log. Immutable once created and
/// owned exclusively by its parent Timelog.
#[derive(Debug, Clone, Serialize)]
pub struct TimelogEntry {
    pub id: i64,
    pub task_description: String,
    pub time_taken_hours: f64,
    pub kind: EntryKind,
    pub feature_title: Option<String>,
}

/// A user's day-end log for one project and one calendar date.
///
/// `log_date` may be absent on legacy rows; the logical date then falls
/// back to the date portion of `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Timelog {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    pub log_date: Option<NaiveDate>,    // ⇔ timelogs.log_date (TEXT "YYYY-MM-DD", nullable)
    pub created_at: NaiveDateTime,      // ⇔ timelogs.created_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub entries: Vec<TimelogEntry>,
}

impl Timelog {
    /// The logical calendar date this log belongs to.
    pub fn effective_date(&self) -> NaiveDate {
        self.log_date.unwrap_or_else(|| self.created_at.date())
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.time_taken_hours).sum()
    }
}
