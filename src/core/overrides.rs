use crate::db::{log, overrides as store};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, CategoryOverride};
use rusqlite::Connection;

pub struct OverrideLogic;

impl OverrideLogic {
    /// Pin `section` to the category named by `code` (GA, GA+, VIP, ...).
    pub fn set(conn: &Connection, user: &str, section: &str, code: &str) -> AppResult<Category> {
        let section = section.trim();
        if section.is_empty() {
            return Err(AppError::Other("Section label must not be empty".into()));
        }
        let category =
            Category::from_code(code).ok_or_else(|| AppError::InvalidCategory(code.to_string()))?;

        store::set_override(conn, user, section, category)?;
        log::record_or_warn(
            conn,
            "override_set",
            section,
            &format!("Section '{}' → {}", section, category.label()),
        );
        Ok(category)
    }

    pub fn delete(conn: &Connection, user: &str, section: &str) -> AppResult<()> {
        let section = section.trim();
        store::delete_override(conn, user, section)?;
        log::record_or_warn(
            conn,
            "override_del",
            section,
            &format!("Removed override for '{}'", section),
        );
        Ok(())
    }

    pub fn list(conn: &Connection, user: &str) -> AppResult<Vec<CategoryOverride>> {
        store::list_overrides(conn, user)
    }
}
