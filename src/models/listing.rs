use chrono::{DateTime, Local};
use serde::Serialize;

/// Per-user flags the desk keeps about a feed listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingFlags {
    pub user: String,
    pub listing_id: String,
    pub autopriced: bool,
    pub tags: Vec<String>,
    pub unverified_at: Option<DateTime<Local>>,
    pub updated_at: String,
}

impl ListingFlags {
    pub fn empty(user: &str, listing_id: &str) -> Self {
        Self {
            user: user.to_string(),
            listing_id: listing_id.to_string(),
            autopriced: false,
            tags: Vec::new(),
            unverified_at: None,
            updated_at: String::new(),
        }
    }
}
