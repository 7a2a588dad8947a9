use crate::core::calculator::classify::WeekendPolicy;
use crate::core::calculator::{aggregate, classify, range, summary};
use crate::models::date_status::{DateStatus, LogSummary};
use crate::models::timelog::Timelog;
use chrono::NaiveDate;

pub struct Core;

/// Full output of one reconciliation pass for a (user, project) pair.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub statuses: Vec<DateStatus>,
    pub summary: LogSummary,
    /// Dates whose raw records were merged from duplicate submissions.
    pub merged_dates: Vec<NaiveDate>,
}

impl Core {
    /// Resolver → aggregator → classifier → summary. Pure over
    /// already-fetched data; callers must not invoke this with partial
    /// fetch results.
    pub fn reconcile(
        raw: &[Timelog],
        membership_start: Option<NaiveDate>,
        today: NaiveDate,
        policy: WeekendPolicy,
        fallback_months: u32,
    ) -> Reconciliation {
        let dates = range::resolve_date_range(membership_start, today, fallback_months);
        let aggregated = aggregate::aggregate_by_date(raw);

        let merged_dates: Vec<NaiveDate> = aggregated
            .iter()
            .filter(|(_, day)| day.merged_duplicates)
            .map(|(date, _)| *date)
            .collect();

        let statuses = classify::classify(&dates, &aggregated, policy);
        let summary = summary::summarize(&statuses);

        Reconciliation {
            statuses,
            summary,
            merged_dates,
        }
    }
}
