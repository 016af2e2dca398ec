use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile { feed, json } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let (bundle, overrides) = DashboardLogic::load_for_user(
            cfg,
            &pool.conn,
            feed.feed_dir.as_deref(),
            &feed.events,
        )?;
        let dashboard = DashboardLogic::build(&bundle, &overrides);

        if *json {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        } else {
            DashboardLogic::print_dashboard(&bundle, &dashboard);
        }

        log::record_or_warn(
            &pool.conn,
            "reconcile",
            "",
            &format!(
                "{} event(s), differential {}",
                dashboard.events.len(),
                dashboard.overall.differential.total
            ),
        );
    }
    Ok(())
}
