use crate::models::date_status::DateStatus;
use serde::Serialize;

/// Flat export row for the reconciliation report: one row per task entry
/// on completed dates, one placeholder row per pending date.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub date: String,
    pub status: String,
    pub task: String,
    pub kind: String,
    pub hours: Option<f64>,
    pub feature: Option<String>,
    pub logged_at: Option<String>,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "status", "task", "kind", "hours", "feature", "logged_at"]
}

pub(crate) fn build_report_rows(statuses: &[DateStatus]) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for s in statuses {
        let date = s.date.format("%Y-%m-%d").to_string();
        let logged_at = s
            .created_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string());

        if s.entries.is_empty() {
            rows.push(ReportRow {
                date,
                status: s.status.as_str().to_string(),
                task: String::new(),
                kind: String::new(),
                hours: None,
                feature: None,
                logged_at,
            });
            continue;
        }

        for entry in &s.entries {
            rows.push(ReportRow {
                date: date.clone(),
                status: s.status.as_str().to_string(),
                task: entry.task_description.clone(),
                kind: entry.kind.as_str().to_string(),
                hours: Some(entry.time_taken_hours),
                feature: entry.feature_title.clone(),
                logged_at: logged_at.clone(),
            });
        }
    }

    rows
}

/// Convert a row into display cells (for PDF and XLSX).
pub(crate) fn row_to_cells(r: &ReportRow) -> Vec<String> {
    vec![
        r.date.clone(),
        r.status.clone(),
        r.task.clone(),
        r.kind.clone(),
        r.hours.map(|h| h.to_string()).unwrap_or_default(),
        r.feature.clone().unwrap_or_default(),
        r.logged_at.clone().unwrap_or_default(),
    ]
}

pub(crate) fn rows_to_table(rows: &[ReportRow]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}
