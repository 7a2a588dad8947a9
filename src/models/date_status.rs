use super::timelog::TimelogEntry;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LogStatus {
    Completed,
    Pending,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Completed => "completed",
            LogStatus::Pending => "pending",
        }
    }
}

/// Per-date reconciliation row. Computed fresh on every query for display
/// purposes and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DateStatus {
    pub date: NaiveDate,
    pub status: LogStatus,
    pub entries: Vec<TimelogEntry>,
    /// Submission timestamp of the underlying log (earliest one when
    /// duplicate records were merged). None for pending dates.
    pub created_at: Option<NaiveDateTime>,
}

impl DateStatus {
    pub fn is_completed(&self) -> bool {
        self.status == LogStatus::Completed
    }

    pub fn is_pending(&self) -> bool {
        self.status == LogStatus::Pending
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.time_taken_hours).sum()
    }
}

/// Aggregate counters over a classified date list, used for badges and
/// report headers.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct LogSummary {
    pub completed: usize,
    pub pending: usize,
    pub total: usize,
}
