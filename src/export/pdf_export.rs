use crate::errors::AppResult;
use crate::export::model::{ReportRow, get_headers, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::ReportPdf;
use crate::models::date_status::LogSummary;
use crate::ui::messages::info;
use std::path::Path;

pub(crate) fn export_pdf(
    rows: &[ReportRow],
    summary: &LogSummary,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let summary_lines = vec![
        format!("Completed logs: {}", summary.completed),
        format!("Pending logs:   {}", summary.pending),
        format!("Total dates:    {}", summary.total),
    ];

    let table = rows_to_table(rows);

    let mut pdf = ReportPdf::new();
    pdf.write_report(title, &summary_lines, &get_headers(), &table);
    pdf.save(path)?;

    notify_export_success("PDF", path);
    Ok(())
}
