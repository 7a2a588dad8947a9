use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            UserAction::Add {
                first_name,
                last_name,
                email,
                admin,
                client,
            } => {
                // Duplicate email → clear error instead of a constraint failure
                if queries::find_user_by_email(&pool.conn, email)?.is_some() {
                    return Err(AppError::Other(format!("User '{}' already exists", email)));
                }

                queries::insert_user(&pool.conn, first_name, last_name, email, *admin, *client)?;

                let _ = log::oplog(
                    &pool.conn,
                    "user_add",
                    email,
                    &format!("User {} {} created", first_name, last_name),
                );
                success(format!("User '{}' created.", email));
            }

            UserAction::List { all } => {
                let users = queries::load_users(&pool.conn, *all)?;

                if users.is_empty() {
                    println!("No users found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("NAME", 4),
                    Column::new("EMAIL", 5),
                    Column::new("ROLE", 4),
                    Column::new("ACTIVE", 6),
                    Column::new("CREATED", 7),
                ]);

                for u in &users {
                    let role = if u.is_admin {
                        "admin"
                    } else if u.is_client {
                        "client"
                    } else {
                        "member"
                    };

                    table.add_row(vec![
                        u.full_name(),
                        u.email.clone(),
                        role.to_string(),
                        if u.is_active { "yes" } else { "no" }.to_string(),
                        u.created_at.format("%Y-%m-%d").to_string(),
                    ]);
                }

                print!("{}", table.render());
            }

            UserAction::Deactivate { email } => {
                let user = queries::find_user_by_email(&pool.conn, email)?
                    .ok_or_else(|| AppError::UnknownUser(email.clone()))?;

                queries::deactivate_user(&pool.conn, user.id)?;

                let _ = log::oplog(&pool.conn, "user_deactivate", email, "User deactivated");
                success(format!("User '{}' deactivated.", email));
            }
        }
    }

    Ok(())
}
