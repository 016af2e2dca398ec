use crate::db::db_utils::{now_rfc3339, parse_json_list, parse_opt_timestamp};
use crate::errors::AppResult;
use crate::models::ListingFlags;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_flags(row: &Row) -> rusqlite::Result<ListingFlags> {
    let tags: String = row.get("tags")?;
    Ok(ListingFlags {
        user: row.get("user")?,
        listing_id: row.get("listing_id")?,
        autopriced: row.get::<_, i32>("autopriced")? == 1,
        tags: parse_json_list(3, &tags)?,
        unverified_at: parse_opt_timestamp(4, row.get("unverified_at")?)?,
        updated_at: row.get("updated_at")?,
    })
}

/// Make sure a row exists so the column updates below can be plain UPDATEs.
fn ensure_row(conn: &Connection, user: &str, listing_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO listing_flags (user, listing_id, updated_at)
         VALUES (?1, ?2, ?3)",
        params![user, listing_id, now_rfc3339()],
    )?;
    Ok(())
}

pub fn get_flags(conn: &Connection, user: &str, listing_id: &str) -> AppResult<ListingFlags> {
    let found = conn
        .query_row(
            "SELECT user, listing_id, autopriced, tags, unverified_at, updated_at
             FROM listing_flags
             WHERE user = ?1 AND listing_id = ?2",
            params![user, listing_id],
            map_flags,
        )
        .optional()?;

    Ok(found.unwrap_or_else(|| ListingFlags::empty(user, listing_id)))
}

pub fn list_flags(conn: &Connection, user: &str) -> AppResult<Vec<ListingFlags>> {
    let mut stmt = conn.prepare(
        "SELECT user, listing_id, autopriced, tags, unverified_at, updated_at
         FROM listing_flags
         WHERE user = ?1
         ORDER BY listing_id ASC",
    )?;
    let rows = stmt.query_map([user], map_flags)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_autopriced(conn: &Connection, user: &str, listing_id: &str, on: bool) -> AppResult<()> {
    ensure_row(conn, user, listing_id)?;
    conn.execute(
        "UPDATE listing_flags SET autopriced = ?3, updated_at = ?4
         WHERE user = ?1 AND listing_id = ?2",
        params![user, listing_id, if on { 1 } else { 0 }, now_rfc3339()],
    )?;
    Ok(())
}

/// Replace the desk's own tags for a listing (empty slice clears them).
pub fn set_tags(conn: &Connection, user: &str, listing_id: &str, tags: &[String]) -> AppResult<()> {
    ensure_row(conn, user, listing_id)?;
    conn.execute(
        "UPDATE listing_flags SET tags = ?3, updated_at = ?4
         WHERE user = ?1 AND listing_id = ?2",
        params![user, listing_id, serde_json::to_string(tags)?, now_rfc3339()],
    )?;
    Ok(())
}

pub fn mark_unverified(
    conn: &Connection,
    user: &str,
    listing_id: &str,
    at: DateTime<Local>,
) -> AppResult<()> {
    ensure_row(conn, user, listing_id)?;
    conn.execute(
        "UPDATE listing_flags SET unverified_at = ?3, updated_at = ?4
         WHERE user = ?1 AND listing_id = ?2",
        params![user, listing_id, at.to_rfc3339(), now_rfc3339()],
    )?;
    Ok(())
}

pub fn clear_unverified(conn: &Connection, user: &str, listing_id: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE listing_flags SET unverified_at = NULL, updated_at = ?3
         WHERE user = ?1 AND listing_id = ?2",
        params![user, listing_id, now_rfc3339()],
    )?;
    Ok(())
}
