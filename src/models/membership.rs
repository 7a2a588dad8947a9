use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A user's assignment to a project. One row per (user, project);
/// `start_date`/`end_date` bound which calendar dates are in scope when
/// reconciling that member's day-end logs.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMember {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    pub role: String,
    pub requires_reporting: bool,
    pub start_date: NaiveDate, // ⇔ project_members.start_date (TEXT "YYYY-MM-DD")
    pub end_date: Option<NaiveDate>, // ⇔ project_members.end_date (TEXT, nullable)
    pub created_at: NaiveDateTime,
}

impl ProjectMember {
    /// Upper bound of the member's reporting window as of `today`:
    /// an ended membership stops accruing expected logs.
    pub fn reporting_end(&self, today: NaiveDate) -> NaiveDate {
        match self.end_date {
            Some(end) => end.min(today),
            None => today,
        }
    }
}
