use super::de;
use serde::{Deserialize, Serialize};

/// One order, possibly spanning several listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::id")]
    pub event_id: String,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub items: Vec<SaleItem>,
    /// Order-level tags, used for items that carry none of their own.
    #[serde(default, deserialize_with = "de::tags")]
    pub tags: Vec<String>,
}

impl SaleRecord {
    pub fn new(id: &str, items: Vec<SaleItem>) -> Self {
        Self {
            id: id.to_string(),
            items,
            ..Default::default()
        }
    }

    pub fn with_event(mut self, event_id: &str) -> Self {
        self.event_id = event_id.to_string();
        self
    }
}

/// A line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    #[serde(default, deserialize_with = "de::opt_id", skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub section: String,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    pub ticket_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    pub available_now: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SaleItem {
    pub fn new(section: &str, quantity: i64, tags: &[&str]) -> Self {
        Self {
            section: section.to_string(),
            quantity: Some(quantity),
            tags: if tags.is_empty() {
                None
            } else {
                Some(tags.iter().map(|t| t.to_string()).collect())
            },
            ..Default::default()
        }
    }

    pub fn for_listing(mut self, listing_id: &str) -> Self {
        self.listing_id = Some(listing_id.to_string());
        self
    }

    /// Number of tickets on this line.
    ///
    /// Resolution order: `quantity`, `ticketQuantity`, `availableNow`, then 1.
    /// Negative values clamp to 0.
    pub fn resolved_quantity(&self) -> i64 {
        self.quantity
            .or(self.ticket_quantity)
            .or(self.available_now)
            .unwrap_or(1)
            .max(0)
    }

    /// The item's own tags, `None` when it carries none.
    pub fn own_tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|t| !t.is_empty())
    }
}
