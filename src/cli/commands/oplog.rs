use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::oplog::OplogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Oplog { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        OplogLogic::print(&mut pool)?;
    }

    Ok(())
}
