use crate::db::migrate::{known_versions, pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub overrides: i64,
    pub listing_flags: i64,
    pub checklist_items: i64,
    pub checked_items: i64,
    pub log_rows: i64,
    pub last_activity: Option<String>,
}

fn count(pool: &DbPool, sql: &str) -> AppResult<i64> {
    Ok(pool.conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn collect_stats(pool: &DbPool) -> AppResult<DbStats> {
    Ok(DbStats {
        overrides: count(pool, "SELECT COUNT(*) FROM category_overrides")?,
        listing_flags: count(pool, "SELECT COUNT(*) FROM listing_flags")?,
        checklist_items: count(pool, "SELECT COUNT(*) FROM checklist_items")?,
        checked_items: count(pool, "SELECT COUNT(*) FROM checklist_items WHERE checked = 1")?,
        log_rows: count(pool, "SELECT COUNT(*) FROM log")?,
        last_activity: pool
            .conn
            .query_row(
                "SELECT date FROM log WHERE operation <> 'migration_applied'
                 ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let pending = pending_migrations(&pool.conn)?;
    println!(
        "{}• Schema:{} {}/{} migrations applied",
        CYAN,
        RESET,
        known_versions().len() - pending.len(),
        known_versions().len()
    );

    let stats = collect_stats(pool)?;
    println!("{}• Category overrides:{} {}{}{}", CYAN, RESET, GREEN, stats.overrides, RESET);
    println!("{}• Listing flags:{} {}", CYAN, RESET, stats.listing_flags);
    println!(
        "{}• Checklist items:{} {} ({} checked)",
        CYAN, RESET, stats.checklist_items, stats.checked_items
    );
    println!("{}• Log rows:{} {}", CYAN, RESET, stats.log_rows);

    let last = stats
        .last_activity
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last activity:{} {}", CYAN, RESET, last);

    println!();
    Ok(())
}
