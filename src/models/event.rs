use super::de;
use serde::{Deserialize, Serialize};

/// Event as listed by the feed. Only what the desk displays is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Set when the lookup failed and this row stands in for the real event.
    #[serde(skip)]
    pub placeholder: bool,
}

impl EventSummary {
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Event {id}"),
            venue: None,
            date: None,
            placeholder: true,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
