use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::WeekendPolicy;
use crate::core::logic::Core;
use crate::core::report;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_optional, status_tag};
use crate::utils::date::{self, fmt_display_date};
use crate::utils::fmt_hours;
use crate::utils::table::{Column, Table};

/// The reconciliation view: one row per date in the member's range,
/// completed or pending, with summary badges and pagination.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        user,
        project,
        today,
        filter,
        page,
        details,
        show_weekend_pending,
        skip_weekend_pending,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let today_d = match today {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let user_rec = queries::find_user_by_email(&pool.conn, user)?
            .ok_or_else(|| AppError::UnknownUser(user.clone()))?;
        let project_rec = queries::find_project_by_name(&pool.conn, project)?
            .ok_or_else(|| AppError::UnknownProject(project.clone()))?;
        let member = queries::load_membership(&pool.conn, user_rec.id, project_rec.id)?
            .ok_or_else(|| AppError::NotAMember {
                user: user.clone(),
                project: project.clone(),
            })?;

        // CLI flags override the configured policy for this invocation.
        let policy = if *show_weekend_pending {
            WeekendPolicy::ShowWeekendPending
        } else if *skip_weekend_pending {
            WeekendPolicy::SkipWeekendPending
        } else {
            cfg.weekend_policy()?
        };

        // An ended membership stops accruing expected logs.
        let end_d = member.reporting_end(today_d);

        // A failed fetch must never reach the calculator with partial data.
        let raw = queries::load_timelogs_for_member(
            &pool.conn,
            user_rec.id,
            project_rec.id,
            member.start_date,
            end_d,
        )
        .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        let rec = Core::reconcile(
            &raw,
            Some(member.start_date),
            end_d,
            policy,
            cfg.fallback_window_months,
        );

        for d in &rec.merged_dates {
            warning(format!(
                "Duplicate day-end logs merged for {} (check earlier submissions)",
                d
            ));
        }

        // Header card
        header(format!("{} — {}", user_rec.full_name(), project_rec.name));
        println!("Role: {} • Email: {}", member.role, user_rec.email);
        println!(
            "Completed: {} | Pending: {} | Total: {}",
            rec.summary.completed, rec.summary.pending, rec.summary.total
        );
        println!();

        let filtered = report::filter_rows(&rec.statuses, *filter);
        let (rows, page_info) = report::paginate(&filtered, *page, cfg.page_size);

        if rows.is_empty() {
            println!("No dates to show for '{}'.", filter.label());
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("STATUS", 6),
            Column::new("LOGGED", 10),
            Column::new("HOURS", 5),
            Column::new("TASKS", 5),
        ]);

        for row in &rows {
            let logged = row
                .created_at
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "--".to_string());
            let hours = if row.entries.is_empty() {
                "--".to_string()
            } else {
                fmt_hours(row.total_hours())
            };

            table.add_row(vec![
                fmt_display_date(row.date),
                status_tag(row.status),
                colorize_optional(&logged),
                colorize_optional(&hours),
                row.entries.len().to_string(),
            ]);
        }

        print!("{}", table.render());

        if *details {
            for row in &rows {
                if row.entries.is_empty() {
                    continue;
                }
                println!(
                    "\n{} — total {}:",
                    fmt_display_date(row.date),
                    fmt_hours(row.total_hours())
                );
                for e in &row.entries {
                    let feature = e.feature_title.as_deref().unwrap_or("-");
                    println!(
                        "  - [{}] {} ({}, feature: {})",
                        fmt_hours(e.time_taken_hours),
                        e.task_description,
                        e.kind.as_str(),
                        feature
                    );
                }
            }
            println!();
        }

        println!(
            "Dates per page {} • {}-{} of {} • page {}/{}",
            cfg.page_size,
            page_info.start + 1,
            page_info.end,
            page_info.total_rows,
            page_info.page,
            page_info.total_pages
        );
    }

    Ok(())
}
