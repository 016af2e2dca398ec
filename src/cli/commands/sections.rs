use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sections { feed } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let (bundle, overrides) = DashboardLogic::load_for_user(
            cfg,
            &pool.conn,
            feed.feed_dir.as_deref(),
            &feed.events,
        )?;
        DashboardLogic::print_sections(&bundle, &overrides);
    }
    Ok(())
}
