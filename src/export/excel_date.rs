use chrono::{NaiveDate, NaiveDateTime};

/// Interpret a report cell as a date or timestamp, returning the Excel
/// serial plus its number format. The report only emits two shapes:
/// "YYYY-MM-DD" (log date) and "YYYY-MM-DD HH:MM:SS" (submission time).
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(("yyyy-mm-dd hh:mm", naive_datetime_to_excel_serial(&dt)));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(("yyyy-mm-dd", naive_datetime_to_excel_serial(&dt)));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
