use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A schema step, applied once and remembered in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_category_overrides",
        description: "Created category_overrides table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS category_overrides (
            user        TEXT NOT NULL,
            section     TEXT NOT NULL,
            category    TEXT NOT NULL
                        CHECK(category IN ('GA','GA_PLUS','VIP','SHUTTLE','CONCERN','UNCATEGORIZED')),
            updated_at  TEXT NOT NULL,
            PRIMARY KEY (user, section)
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_listing_flags",
        description: "Created listing_flags table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS listing_flags (
            user          TEXT NOT NULL,
            listing_id    TEXT NOT NULL,
            autopriced    INTEGER NOT NULL DEFAULT 0,
            tags          TEXT NOT NULL DEFAULT '[]',
            unverified_at TEXT,
            updated_at    TEXT NOT NULL,
            PRIMARY KEY (user, listing_id)
        );
        "#,
    },
    Migration {
        version: "20250308_0003_create_checklist_items",
        description: "Created checklist_items table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS checklist_items (
            user            TEXT NOT NULL,
            kind            TEXT NOT NULL
                            CHECK(kind IN ('pricing','tagging','bookmarking','alerting')),
            subject         TEXT NOT NULL,
            checked         INTEGER NOT NULL DEFAULT 0,
            checked_at      TEXT,
            last_reset_at   TEXT NOT NULL,
            schedule        TEXT NOT NULL DEFAULT 'daily:0',
            next_milestones TEXT NOT NULL DEFAULT '[]',
            updated_at      TEXT NOT NULL,
            PRIMARY KEY (user, kind, subject)
        );

        CREATE INDEX IF NOT EXISTS idx_checklist_user_kind ON checklist_items(user, kind);
        "#,
    },
];

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Versions known to this build, oldest first.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|m| m.version).collect()
}

/// Versions not yet recorded as applied.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db(). Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied.push(m.version);
    }

    Ok(applied)
}
