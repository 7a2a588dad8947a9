//! Filtering and fixed-size pagination over a reconciliation view.

use crate::models::date_status::DateStatus;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn keeps(&self, row: &DateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => row.is_pending(),
            StatusFilter::Completed => row.is_completed(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Timelogs",
            StatusFilter::Pending => "Pending Timelogs",
            StatusFilter::Completed => "Completed Timelogs",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    /// 0-based half-open window [start, end) into the filtered rows.
    pub start: usize,
    pub end: usize,
}

pub fn filter_rows<'a>(rows: &'a [DateStatus], filter: StatusFilter) -> Vec<&'a DateStatus> {
    rows.iter().filter(|r| filter.keeps(r)).collect()
}

/// Fixed-size pagination. Out-of-range page numbers clamp into
/// `[1, total_pages]` instead of failing.
pub fn paginate<'a>(
    rows: &[&'a DateStatus],
    page: usize,
    page_size: usize,
) -> (Vec<&'a DateStatus>, PageInfo) {
    let page_size = page_size.max(1);
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_rows);

    (
        rows[start..end].to_vec(),
        PageInfo {
            page,
            total_pages,
            total_rows,
            start,
            end,
        },
    )
}
