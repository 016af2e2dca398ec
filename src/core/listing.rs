use crate::db::{listings as store, log};
use crate::errors::{AppError, AppResult};
use crate::models::{InventoryRecord, ListingFlags};
use rusqlite::Connection;
use std::collections::HashMap;

pub struct ListingLogic;

impl ListingLogic {
    pub fn set_autopriced(conn: &Connection, user: &str, listing_id: &str, on: bool) -> AppResult<()> {
        store::set_autopriced(conn, user, listing_id, on)?;
        log::record_or_warn(
            conn,
            "listing_autoprice",
            listing_id,
            if on { "Autopricing on" } else { "Autopricing off" },
        );
        Ok(())
    }

    /// Add tags to the listing, keeping the ones already set.
    pub fn tag(conn: &Connection, user: &str, listing_id: &str, tags: &[String]) -> AppResult<Vec<String>> {
        let mut current = store::get_flags(conn, user, listing_id)?.tags;
        for t in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !current.iter().any(|c| c.eq_ignore_ascii_case(t)) {
                current.push(t.to_string());
            }
        }
        if current.is_empty() {
            return Err(AppError::Other("No tags given".into()));
        }

        store::set_tags(conn, user, listing_id, &current)?;
        log::record_or_warn(conn, "listing_tag", listing_id, &current.join(", "));
        Ok(current)
    }

    pub fn untag(conn: &Connection, user: &str, listing_id: &str) -> AppResult<()> {
        store::set_tags(conn, user, listing_id, &[])?;
        log::record_or_warn(conn, "listing_untag", listing_id, "Cleared desk tags");
        Ok(())
    }

    pub fn show(conn: &Connection, user: &str, listing_id: &str) -> AppResult<ListingFlags> {
        store::get_flags(conn, user, listing_id)
    }

    pub fn list(conn: &Connection, user: &str) -> AppResult<Vec<ListingFlags>> {
        store::list_flags(conn, user)
    }
}

/// Append desk tags to the feed tags of the matching inventory records.
pub fn apply_desk_tags(inventory: &mut [InventoryRecord], flags: &[ListingFlags]) {
    let by_id: HashMap<&str, &ListingFlags> = flags
        .iter()
        .filter(|f| !f.tags.is_empty())
        .map(|f| (f.listing_id.as_str(), f))
        .collect();

    for record in inventory.iter_mut() {
        if let Some(f) = by_id.get(record.id.as_str()) {
            for t in &f.tags {
                if !record.tags.iter().any(|c| c.eq_ignore_ascii_case(t)) {
                    record.tags.push(t.clone());
                }
            }
        }
    }
}
