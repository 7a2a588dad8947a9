use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            ProjectAction::Add {
                name,
                description,
                client,
            } => {
                if queries::find_project_by_name(&pool.conn, name)?.is_some() {
                    return Err(AppError::Other(format!(
                        "Project '{}' already exists",
                        name
                    )));
                }

                // Optional client account attached to the project
                let client_user_id = match client {
                    Some(email) => {
                        let user = queries::find_user_by_email(&pool.conn, email)?
                            .ok_or_else(|| AppError::UnknownUser(email.clone()))?;
                        Some(user.id)
                    }
                    None => None,
                };

                queries::insert_project(&pool.conn, name, description, client_user_id)?;

                let _ = log::oplog(&pool.conn, "project_add", name, "Project created");
                success(format!("Project '{}' created.", name));
            }

            ProjectAction::List { all } => {
                let projects = queries::load_projects(&pool.conn, *all)?;

                if projects.is_empty() {
                    println!("No projects found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("NAME", 4),
                    Column::new("DESCRIPTION", 11),
                    Column::new("ACTIVE", 6),
                    Column::new("CREATED", 7),
                ]);

                for p in &projects {
                    table.add_row(vec![
                        p.name.clone(),
                        p.description.clone(),
                        if p.is_active { "yes" } else { "no" }.to_string(),
                        p.created_at.format("%Y-%m-%d").to_string(),
                    ]);
                }

                print!("{}", table.render());
            }

            ProjectAction::Close { name } => {
                let project = queries::find_project_by_name(&pool.conn, name)?
                    .ok_or_else(|| AppError::UnknownProject(name.clone()))?;

                queries::close_project(&pool.conn, project.id)?;

                let _ = log::oplog(&pool.conn, "project_close", name, "Project closed");
                success(format!("Project '{}' closed.", name));
            }
        }
    }

    Ok(())
}
