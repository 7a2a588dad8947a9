//! Library-level tests for the reconciliation core: date range
//! resolution, aggregation, classification and summary counting.

use chrono::NaiveDate;
use daylogger::core::calculator::aggregate::aggregate_by_date;
use daylogger::core::calculator::classify::WeekendPolicy;
use daylogger::core::calculator::range::resolve_date_range;
use daylogger::core::calculator::summary::summarize;
use daylogger::core::logic::Core;
use daylogger::models::date_status::LogStatus;
use daylogger::models::entry_kind::EntryKind;
use daylogger::models::timelog::{Timelog, TimelogEntry};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

fn entry(id: i64, hours: f64, kind: EntryKind) -> TimelogEntry {
    TimelogEntry {
        id,
        task_description: format!("task {}", id),
        time_taken_hours: hours,
        kind,
        feature_title: None,
    }
}

fn timelog(id: i64, log_date: Option<&str>, created_at: &str, entries: Vec<TimelogEntry>) -> Timelog {
    Timelog {
        id,
        user_id: 1,
        project_id: 1,
        log_date: log_date.map(d),
        created_at: chrono::NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S")
            .expect("test datetime"),
        entries,
    }
}

#[test]
fn range_includes_both_endpoints_descending_without_gaps() {
    let range = resolve_date_range(Some(d("2025-09-15")), d("2025-10-08"), 6);

    assert_eq!(range.first().copied(), Some(d("2025-10-08")));
    assert_eq!(range.last().copied(), Some(d("2025-09-15")));

    for pair in range.windows(2) {
        assert_eq!(pair[0].pred_opt().unwrap(), pair[1], "gap in range");
    }
}

#[test]
fn range_clamps_future_membership_start_to_single_day() {
    let range = resolve_date_range(Some(d("2025-10-10")), d("2025-10-08"), 6);
    assert_eq!(range, vec![d("2025-10-08")]);
}

#[test]
fn range_falls_back_six_months_when_start_is_missing() {
    // Scenario C: 2025-10-08 minus 6 calendar months → 2025-04-08.
    let range = resolve_date_range(None, d("2025-10-08"), 6);

    assert_eq!(range.first().copied(), Some(d("2025-10-08")));
    assert_eq!(range.last().copied(), Some(d("2025-04-08")));
}

#[test]
fn aggregation_merges_duplicate_dates_keeping_earliest_created_at() {
    // Scenario B: two raw records for 2025-10-02.
    let raw = vec![
        timelog(
            1,
            Some("2025-10-02"),
            "2025-10-02 18:00:00",
            vec![entry(1, 2.0, EntryKind::Work)],
        ),
        timelog(
            2,
            Some("2025-10-02"),
            "2025-10-02 19:30:00",
            vec![entry(2, 1.0, EntryKind::Meeting)],
        ),
    ];

    let aggregated = aggregate_by_date(&raw);

    assert_eq!(aggregated.len(), 1);
    let day = aggregated.get(&d("2025-10-02")).expect("merged day");
    assert_eq!(day.entries.len(), 2);
    assert!((day.total_hours() - 3.0).abs() < f64::EPSILON);
    assert!(day.merged_duplicates);
    assert_eq!(
        day.canonical_created_at,
        chrono::NaiveDateTime::parse_from_str("2025-10-02 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    );
}

#[test]
fn aggregation_is_idempotent_over_its_input() {
    let raw = vec![
        timelog(
            1,
            Some("2025-10-02"),
            "2025-10-02 18:00:00",
            vec![entry(1, 2.0, EntryKind::Work)],
        ),
        timelog(
            2,
            Some("2025-10-03"),
            "2025-10-03 18:00:00",
            vec![entry(2, 4.0, EntryKind::Work)],
        ),
    ];

    let first = aggregate_by_date(&raw);
    let second = aggregate_by_date(&raw);

    assert_eq!(first.len(), second.len());
    for (date, day) in &first {
        let other = second.get(date).expect("same keys");
        assert_eq!(day.entries.len(), other.entries.len());
        assert_eq!(day.canonical_created_at, other.canonical_created_at);
    }
}

#[test]
fn missing_log_date_falls_back_to_created_at_date() {
    // Scenario D: no explicit log date, created 2025-10-05 14:00.
    let raw = vec![timelog(
        1,
        None,
        "2025-10-05 14:00:00",
        vec![entry(1, 1.0, EntryKind::Work)],
    )];

    let aggregated = aggregate_by_date(&raw);
    assert!(aggregated.contains_key(&d("2025-10-05")));
}

#[test]
fn weekends_without_entries_are_omitted_under_skip_policy() {
    // Scenario A: Oct 1 (Wed) through Oct 8 (Wed) 2025, no entries at all.
    let rec = Core::reconcile(
        &[],
        Some(d("2025-10-01")),
        d("2025-10-08"),
        WeekendPolicy::SkipWeekendPending,
        6,
    );

    // Oct 4–5 is a weekend: 6 weekday rows survive, all pending.
    assert_eq!(rec.summary.total, 6);
    assert_eq!(rec.summary.pending, 6);
    assert_eq!(rec.summary.completed, 0);

    let expected: Vec<NaiveDate> = [
        "2025-10-08",
        "2025-10-07",
        "2025-10-06",
        "2025-10-03",
        "2025-10-02",
        "2025-10-01",
    ]
    .iter()
    .map(|s| d(s))
    .collect();
    let got: Vec<NaiveDate> = rec.statuses.iter().map(|s| s.date).collect();
    assert_eq!(got, expected);

    // No pending weekend row may survive the skip policy.
    assert!(
        rec.statuses
            .iter()
            .all(|s| !(s.is_pending() && daylogger::utils::date::is_weekend(s.date)))
    );
}

#[test]
fn weekends_without_entries_show_as_pending_under_show_policy() {
    let rec = Core::reconcile(
        &[],
        Some(d("2025-10-01")),
        d("2025-10-08"),
        WeekendPolicy::ShowWeekendPending,
        6,
    );

    assert_eq!(rec.summary.total, 8);
    assert_eq!(rec.summary.pending, 8);
}

#[test]
fn weekend_with_entries_is_completed_under_both_policies() {
    let raw = vec![timelog(
        1,
        Some("2025-10-04"), // Saturday
        "2025-10-04 20:00:00",
        vec![entry(1, 3.0, EntryKind::Work)],
    )];

    for policy in [
        WeekendPolicy::SkipWeekendPending,
        WeekendPolicy::ShowWeekendPending,
    ] {
        let rec = Core::reconcile(&raw, Some(d("2025-10-04")), d("2025-10-04"), policy, 6);
        assert_eq!(rec.summary.completed, 1);
        assert_eq!(rec.statuses[0].status, LogStatus::Completed);
    }
}

#[test]
fn summary_counts_always_add_up() {
    let raw = vec![
        timelog(
            1,
            Some("2025-10-02"),
            "2025-10-02 18:00:00",
            vec![entry(1, 2.0, EntryKind::Work)],
        ),
        timelog(
            2,
            Some("2025-10-06"),
            "2025-10-06 18:15:00",
            vec![entry(2, 5.0, EntryKind::Work), entry(3, 1.0, EntryKind::Break)],
        ),
    ];

    let rec = Core::reconcile(
        &raw,
        Some(d("2025-10-01")),
        d("2025-10-08"),
        WeekendPolicy::SkipWeekendPending,
        6,
    );

    assert_eq!(
        rec.summary.completed + rec.summary.pending,
        rec.summary.total
    );
    assert_eq!(rec.summary.total, rec.statuses.len());
    assert_eq!(rec.summary.completed, 2);

    // Re-counting the classified rows must agree with the embedded summary.
    assert_eq!(summarize(&rec.statuses), rec.summary);
}

#[test]
fn statuses_preserve_descending_range_order() {
    let raw = vec![timelog(
        1,
        Some("2025-10-03"),
        "2025-10-03 18:00:00",
        vec![entry(1, 8.0, EntryKind::Work)],
    )];

    let rec = Core::reconcile(
        &raw,
        Some(d("2025-10-01")),
        d("2025-10-08"),
        WeekendPolicy::ShowWeekendPending,
        6,
    );

    for pair in rec.statuses.windows(2) {
        assert!(pair[0].date > pair[1].date);
    }
}

#[test]
fn duplicate_dates_are_reported_as_merged() {
    let raw = vec![
        timelog(
            1,
            Some("2025-10-02"),
            "2025-10-02 18:00:00",
            vec![entry(1, 2.0, EntryKind::Work)],
        ),
        timelog(
            2,
            Some("2025-10-02"),
            "2025-10-02 19:00:00",
            vec![entry(2, 1.0, EntryKind::Work)],
        ),
    ];

    let rec = Core::reconcile(
        &raw,
        Some(d("2025-10-02")),
        d("2025-10-02"),
        WeekendPolicy::SkipWeekendPending,
        6,
    );

    assert_eq!(rec.merged_dates, vec![d("2025-10-02")]);
    assert_eq!(rec.statuses.len(), 1);
    assert_eq!(rec.statuses[0].entries.len(), 2);
}
