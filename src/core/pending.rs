use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::date_status::LogSummary;
use crate::models::project::Project;
use chrono::NaiveDate;

/// Pending dates for one reporting membership of a user.
#[derive(Debug)]
pub struct ProjectPending {
    pub project: Project,
    pub role: String,
    pub pending_dates: Vec<NaiveDate>,
    pub summary: LogSummary,
}

pub struct PendingLogic;

impl PendingLogic {
    /// The reminder view: every project the user must report on, with the
    /// dates that still have no day-end log. Memberships with reporting
    /// switched off are not evaluated.
    pub fn collect(
        pool: &mut DbPool,
        cfg: &Config,
        user_email: &str,
        today: NaiveDate,
    ) -> AppResult<Vec<ProjectPending>> {
        let user = queries::find_user_by_email(&pool.conn, user_email)?
            .ok_or_else(|| AppError::UnknownUser(user_email.to_string()))?;

        let policy = cfg.weekend_policy()?;
        let memberships = queries::load_reporting_memberships(&pool.conn, user.id)?;

        let mut out = Vec::new();
        for (member, project) in memberships {
            let end = member.reporting_end(today);

            // A failed fetch must never reach the calculator with partial data.
            let raw = queries::load_timelogs_for_member(
                &pool.conn,
                user.id,
                project.id,
                member.start_date,
                end,
            )
            .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

            let rec = Core::reconcile(
                &raw,
                Some(member.start_date),
                end,
                policy,
                cfg.fallback_window_months,
            );

            let pending_dates = rec
                .statuses
                .iter()
                .filter(|s| s.is_pending())
                .map(|s| s.date)
                .collect();

            out.push(ProjectPending {
                project,
                role: member.role,
                pending_dates,
                summary: rec.summary,
            });
        }

        Ok(out)
    }
}
