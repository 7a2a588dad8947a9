use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::build_report_rows;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::date;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export flow for the reconciliation report.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the classified report of one (user, project) pair.
    ///
    /// - `range`: `None` covers the whole membership up to today;
    ///   otherwise `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `a:b` intervals.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        user_email: &str,
        project_name: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = crate::utils::path::expand_tilde(file);
        let path: &Path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let user = queries::find_user_by_email(&pool.conn, user_email)?
            .ok_or_else(|| AppError::UnknownUser(user_email.to_string()))?;
        let project = queries::find_project_by_name(&pool.conn, project_name)?
            .ok_or_else(|| AppError::UnknownProject(project_name.to_string()))?;
        let member = queries::load_membership(&pool.conn, user.id, project.id)?.ok_or_else(|| {
            AppError::NotAMember {
                user: user.email.clone(),
                project: project.name.clone(),
            }
        })?;

        // Window: explicit range, or the membership's reporting window.
        let (start, end): (NaiveDate, NaiveDate) = match range {
            Some(r) => parse_range(r)?,
            None => (member.start_date, member.reporting_end(date::today())),
        };

        let raw = queries::load_timelogs_for_member(&pool.conn, user.id, project.id, start, end)
            .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        let rec = Core::reconcile(
            &raw,
            Some(start),
            end,
            cfg.weekend_policy()?,
            cfg.fallback_window_months,
        );

        for d in &rec.merged_dates {
            warning(format!(
                "Duplicate day-end logs merged for {} (check earlier submissions)",
                d
            ));
        }

        let rows = build_report_rows(&rec.statuses);

        if rows.is_empty() {
            warning("No dates found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &rec.summary, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(&user.full_name(), &project.name, range);
                export_pdf(&rows, &rec.summary, path, &title)?
            }
        }

        let _ = crate::db::log::oplog(
            &pool.conn,
            "export",
            &format!("{} / {}", user.email, project.name),
            &format!("Report exported as {} to {}", format.as_str(), file),
        );

        Ok(())
    }
}

/// PDF title for the selected period.
fn build_pdf_title(user: &str, project: &str, period: &Option<String>) -> String {
    let base = format!("Day-end logs for {} on {}", user, project);

    let Some(p) = period else {
        return base;
    };

    match p.len() {
        // YYYY
        4 => format!("{} ({})", base, p),
        // YYYY-MM
        7 => {
            let parts: Vec<&str> = p.split('-').collect();
            if parts.len() == 2 {
                let month = date::month_name(parts[1]);
                format!("{} ({} {})", base, month, parts[0])
            } else {
                base
            }
        }
        // YYYY-MM-DD
        10 => format!("{} ({})", base, p),
        // a:b interval
        _ => match p.split_once(':') {
            Some((from, to)) => format!("{} ({} to {})", base, from, to),
            None => base,
        },
    }
}
