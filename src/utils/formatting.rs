//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render an hours amount for tables and reports.
/// Whole amounts drop the decimals: 3.0 → "3h", 2.5 → "2.5h".
pub fn fmt_hours(hours: f64) -> String {
    if (hours - hours.trunc()).abs() < f64::EPSILON {
        format!("{}h", hours.trunc() as i64)
    } else {
        let s = format!("{:.2}", hours);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        format!("{}h", s)
    }
}
