use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        feed,
        force,
    } = cmd
    {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let (bundle, overrides) = DashboardLogic::load_for_user(
            cfg,
            &pool.conn,
            feed.feed_dir.as_deref(),
            &feed.events,
        )?;
        let dashboard = DashboardLogic::build(&bundle, &overrides);

        let rows = ExportLogic::export(&dashboard, format, file, *force)?;
        log::record_or_warn(
            &pool.conn,
            "export",
            file,
            &format!("{} row(s) as {}", rows, format.as_str()),
        );
    }
    Ok(())
}
