use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// Creates the config directory, the configuration file (not in test mode)
/// and the SQLite database, then applies all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing tixdesk…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;
    if applied.is_empty() {
        info("Schema already up to date");
    }

    log::record_or_warn(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    success("tixdesk initialization completed!");
    Ok(())
}
