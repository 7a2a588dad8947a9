use crate::models::date_status::{DateStatus, LogSummary};

/// Counting pass over a classified date list.
/// `completed + pending == total` holds by construction.
pub fn summarize(classified: &[DateStatus]) -> LogSummary {
    let completed = classified.iter().filter(|s| s.is_completed()).count();

    LogSummary {
        completed,
        pending: classified.len() - completed,
        total: classified.len(),
    }
}
