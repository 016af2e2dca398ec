use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { feed_dir } = cmd {
        let bundle = DashboardLogic::load(cfg, feed_dir.as_deref(), &[])?;
        DashboardLogic::print_events(&bundle);
    }
    Ok(())
}
