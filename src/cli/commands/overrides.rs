use crate::cli::parser::{Commands, OverrideAction};
use crate::config::Config;
use crate::core::overrides::OverrideLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Override { action } = cmd else {
        return Ok(());
    };
    let pool = DbPool::open_initialized(&cfg.database)?;
    let conn = &pool.conn;

    match action {
        OverrideAction::Set { section, category } => {
            let c = OverrideLogic::set(conn, &cfg.user, section, category)?;
            success(format!("Section '{}' is now {}", section.trim(), c.label()));
        }
        OverrideAction::Del { section } => {
            OverrideLogic::delete(conn, &cfg.user, section)?;
            success(format!("Override for '{}' removed", section.trim()));
        }
        OverrideAction::List => {
            let rows = OverrideLogic::list(conn, &cfg.user)?;
            if rows.is_empty() {
                info("No overrides defined.");
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column::left("Section"),
                Column::left("Category"),
                Column::left("Updated"),
            ]);
            for o in rows {
                table.add_row(vec![o.section, o.category.label().to_string(), o.updated_at]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
