use super::de;
use serde::{Deserialize, Serialize};

/// Snapshot of a sellable listing as reported by the inventory feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::id")]
    pub event_id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub section: String,
    #[serde(default, deserialize_with = "de::count")]
    pub available_now: i64,
    #[serde(default, deserialize_with = "de::tags")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    pub note_private: Option<String>,
    #[serde(default, deserialize_with = "de::opt_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl InventoryRecord {
    pub fn new(id: &str, section: &str, available_now: i64, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            section: section.to_string(),
            available_now: available_now.max(0),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_event(mut self, event_id: &str) -> Self {
        self.event_id = event_id.to_string();
        self
    }
}
