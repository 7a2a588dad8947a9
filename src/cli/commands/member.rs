use crate::cli::parser::{Commands, MemberAction};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Member { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            MemberAction::Assign {
                user,
                project,
                role,
                start,
                end,
                no_reporting,
            } => {
                let user_rec = queries::find_user_by_email(&pool.conn, user)?
                    .ok_or_else(|| AppError::UnknownUser(user.clone()))?;
                let project_rec = queries::find_project_by_name(&pool.conn, project)?
                    .ok_or_else(|| AppError::UnknownProject(project.clone()))?;

                if queries::load_membership(&pool.conn, user_rec.id, project_rec.id)?.is_some() {
                    return Err(AppError::Other(format!(
                        "User '{}' is already a member of '{}'",
                        user, project
                    )));
                }

                let start_date = match start {
                    Some(s) => {
                        date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?
                    }
                    None => date::today(),
                };

                let end_date = match end {
                    Some(s) => {
                        Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
                    }
                    None => None,
                };

                if let Some(e) = end_date
                    && e < start_date
                {
                    return Err(AppError::InvalidDate(format!(
                        "end date {} is before start date {}",
                        e, start_date
                    )));
                }

                queries::insert_member(
                    &pool.conn,
                    user_rec.id,
                    project_rec.id,
                    role,
                    !*no_reporting,
                    start_date,
                    end_date,
                )?;

                let _ = log::oplog(
                    &pool.conn,
                    "member_assign",
                    &format!("{} / {}", user, project),
                    &format!("Assigned as {} from {}", role, start_date),
                );
                success(format!(
                    "User '{}' assigned to '{}' as {}.",
                    user, project, role
                ));
            }

            MemberAction::List { project } => {
                let project_rec = queries::find_project_by_name(&pool.conn, project)?
                    .ok_or_else(|| AppError::UnknownProject(project.clone()))?;

                let members = queries::load_project_members(&pool.conn, project_rec.id)?;

                if members.is_empty() {
                    println!("No members assigned to '{}'.", project);
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("NAME", 4),
                    Column::new("EMAIL", 5),
                    Column::new("ROLE", 4),
                    Column::new("REPORTING", 9),
                    Column::new("START", 10),
                    Column::new("END", 10),
                ]);

                for (member, user_rec) in &members {
                    table.add_row(vec![
                        user_rec.full_name(),
                        user_rec.email.clone(),
                        member.role.clone(),
                        if member.requires_reporting { "yes" } else { "no" }.to_string(),
                        member.start_date.to_string(),
                        member
                            .end_date
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "--".to_string()),
                    ]);
                }

                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
