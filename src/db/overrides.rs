use crate::db::db_utils::{conversion_error, now_rfc3339};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, CategoryOverride, ManualOverrides};
use rusqlite::{Connection, Row, params};

fn map_override(row: &Row) -> rusqlite::Result<CategoryOverride> {
    let raw: String = row.get("category")?;
    let category = Category::from_db_str(&raw)
        .ok_or_else(|| conversion_error(2, AppError::InvalidCategory(raw.clone())))?;

    Ok(CategoryOverride {
        user: row.get("user")?,
        section: row.get("section")?,
        category,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert or replace the override for `section`.
pub fn set_override(
    conn: &Connection,
    user: &str,
    section: &str,
    category: Category,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO category_overrides (user, section, category, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user, section) DO UPDATE
            SET category = excluded.category, updated_at = excluded.updated_at",
        params![user, section, category.to_db_str(), now_rfc3339()],
    )?;
    Ok(())
}

pub fn delete_override(conn: &Connection, user: &str, section: &str) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM category_overrides WHERE user = ?1 AND section = ?2",
        params![user, section],
    )?;
    if n == 0 {
        return Err(AppError::UnknownOverride(section.to_string()));
    }
    Ok(())
}

pub fn list_overrides(conn: &Connection, user: &str) -> AppResult<Vec<CategoryOverride>> {
    let mut stmt = conn.prepare(
        "SELECT user, section, category, updated_at
         FROM category_overrides
         WHERE user = ?1
         ORDER BY section ASC",
    )?;

    let rows = stmt.query_map([user], map_override)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_manual_overrides(conn: &Connection, user: &str) -> AppResult<ManualOverrides> {
    let rows = list_overrides(conn, user)?;
    Ok(ManualOverrides::from(rows.as_slice()))
}
