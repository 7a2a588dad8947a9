//! Resolves the inclusive list of calendar dates to evaluate for a
//! member, newest first.

use crate::utils::date::months_back;
use chrono::NaiveDate;

/// Default lookback window (in calendar months) when no membership start
/// date is available. Kept as a named constant so config can override it.
pub const DEFAULT_FALLBACK_MONTHS: u32 = 6;

/// Build the descending date range `[today ..= start]`.
///
/// - `membership_start` after `today` is clamped to `today`: a broken
///   anchor date must not block the whole view, so the result is a
///   single-day range rather than an error.
/// - A missing `membership_start` anchors `fallback_months` calendar
///   months before `today` to avoid an unbounded range.
pub fn resolve_date_range(
    membership_start: Option<NaiveDate>,
    today: NaiveDate,
    fallback_months: u32,
) -> Vec<NaiveDate> {
    let anchor = membership_start.unwrap_or_else(|| months_back(today, fallback_months));
    let start = anchor.min(today);

    let mut out = Vec::new();
    let mut d = today;
    while d >= start {
        out.push(d);
        match d.pred_opt() {
            Some(prev) => d = prev,
            None => break,
        }
    }
    out
}
