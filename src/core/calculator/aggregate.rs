//! Groups raw timelog records by their logical log date.

use crate::models::timelog::{Timelog, TimelogEntry};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Entries collected for one calendar date.
#[derive(Debug, Clone)]
pub struct DayEntries {
    pub entries: Vec<TimelogEntry>,
    /// Submission timestamp shown for the day; the earliest one wins when
    /// duplicate records are merged.
    pub canonical_created_at: NaiveDateTime,
    /// More than one raw record shared this date. Duplicate submissions
    /// are tolerated here but callers should warn about them.
    pub merged_duplicates: bool,
}

impl DayEntries {
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.time_taken_hours).sum()
    }
}

/// Group raw records by `effective_date()`. Records sharing a date have
/// their entries concatenated; dates with no record are simply absent
/// from the map. Pure over its input, so repeated calls never accumulate.
pub fn aggregate_by_date(raw: &[Timelog]) -> BTreeMap<NaiveDate, DayEntries> {
    let mut out: BTreeMap<NaiveDate, DayEntries> = BTreeMap::new();

    for log in raw {
        let key = log.effective_date();

        match out.get_mut(&key) {
            Some(day) => {
                day.entries.extend(log.entries.iter().cloned());
                if log.created_at < day.canonical_created_at {
                    day.canonical_created_at = log.created_at;
                }
                day.merged_duplicates = true;
            }
            None => {
                out.insert(
                    key,
                    DayEntries {
                        entries: log.entries.clone(),
                        canonical_created_at: log.created_at,
                        merged_duplicates: false,
                    },
                );
            }
        }
    }

    out
}
