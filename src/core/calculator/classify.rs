//! Derives the per-date completed/pending status over a resolved range.

use super::aggregate::DayEntries;
use crate::models::date_status::{DateStatus, LogStatus};
use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// What to do with weekend dates that have no entries. The two source
/// screens disagreed on this, so it is an explicit setting instead of a
/// hard-coded choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendPolicy {
    /// Empty Saturdays/Sundays are dropped from the output entirely,
    /// so non-working days are never flagged as missed logs. Default.
    SkipWeekendPending,
    /// Empty Saturdays/Sundays are reported as pending.
    ShowWeekendPending,
}

impl WeekendPolicy {
    pub fn code(&self) -> &'static str {
        match self {
            WeekendPolicy::SkipWeekendPending => "skip",
            WeekendPolicy::ShowWeekendPending => "show",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Some(WeekendPolicy::SkipWeekendPending),
            "show" => Some(WeekendPolicy::ShowWeekendPending),
            _ => None,
        }
    }
}

/// Walk the resolved range (already descending) and classify each date.
/// A date with at least one entry is completed; anything else is pending,
/// except weekends under `SkipWeekendPending`, which are omitted.
pub fn classify(
    range: &[NaiveDate],
    aggregated: &BTreeMap<NaiveDate, DayEntries>,
    policy: WeekendPolicy,
) -> Vec<DateStatus> {
    let mut out = Vec::with_capacity(range.len());

    for &date in range {
        match aggregated.get(&date) {
            Some(day) if !day.entries.is_empty() => {
                out.push(DateStatus {
                    date,
                    status: LogStatus::Completed,
                    entries: day.entries.clone(),
                    created_at: Some(day.canonical_created_at),
                });
            }
            _ => {
                if is_weekend(date) && policy == WeekendPolicy::SkipWeekendPending {
                    continue;
                }
                out.push(DateStatus {
                    date,
                    status: LogStatus::Pending,
                    entries: Vec::new(),
                    created_at: None,
                });
            }
        }
    }

    out
}
