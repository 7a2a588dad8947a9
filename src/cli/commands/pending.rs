use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pending::PendingLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};
use crate::utils::date::{self, fmt_display_date};

/// The reminder view: pending dates across every reporting membership.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pending { user, today } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let today_d = match today {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let projects = PendingLogic::collect(&mut pool, cfg, user, today_d)?;

        if projects.is_empty() {
            println!("No reporting memberships for '{}'.", user);
            return Ok(());
        }

        for pp in &projects {
            header(format!("{} ({})", pp.project.name, pp.role));

            if pp.pending_dates.is_empty() {
                success("All day-end logs submitted.");
            } else {
                println!("{} pending date(s):", pp.pending_dates.len());
                for d in &pp.pending_dates {
                    println!("  - {}", fmt_display_date(*d));
                }
            }
            println!();
        }
    }

    Ok(())
}
