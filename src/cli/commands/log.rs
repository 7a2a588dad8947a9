use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{NewEntry, SubmitLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::ui::messages::success;
use crate::utils::date;

/// Submit one day-end log entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        date: date_str,
        user,
        project,
        task,
        hours,
        kind,
        feature,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        let kind = EntryKind::from_code(kind)
            .ok_or_else(|| AppError::InvalidEntryKind(kind.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;

        SubmitLogic::apply(
            &mut pool,
            user,
            project,
            d,
            NewEntry {
                task,
                hours: *hours,
                kind,
                feature: feature.as_deref(),
            },
        )?;

        success(format!(
            "Entry logged for {} on '{}' ({}).",
            user, project, d
        ));
    }

    Ok(())
}
