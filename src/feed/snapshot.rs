use super::FeedSource;
use super::envelope::Envelope;
use crate::errors::{AppError, AppResult};
use crate::models::{EventSummary, InventoryRecord, SaleRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

pub const EVENTS_FILE: &str = "events.json";
pub const INVENTORY_FILE: &str = "inventory.json";
pub const SALES_FILE: &str = "sales.json";

/// JSON snapshots saved from the API (or written by hand) in one directory.
/// A missing file reads as an empty list.
pub struct SnapshotFeed {
    dir: PathBuf,
}

impl SnapshotFeed {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_list<T: DeserializeOwned>(&self, file: &str) -> AppResult<Vec<T>> {
        if !self.dir.is_dir() {
            return Err(AppError::Feed(format!(
                "snapshot directory not found: {}",
                self.dir.display()
            )));
        }

        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let list: Envelope<T> = serde_json::from_str(&content)
            .map_err(|e| AppError::Feed(format!("{}: {}", path.display(), e)))?;
        Ok(list.into_vec())
    }
}

impl FeedSource for SnapshotFeed {
    fn describe(&self) -> String {
        format!("snapshot {}", self.dir.display())
    }

    fn events(&self) -> AppResult<Vec<EventSummary>> {
        let mut events: Vec<EventSummary> = self.read_list(EVENTS_FILE)?;

        // Events that only show up in the records still get listed.
        let inventory: Vec<InventoryRecord> = self.read_list(INVENTORY_FILE)?;
        let sales: Vec<SaleRecord> = self.read_list(SALES_FILE)?;
        let ids = inventory
            .iter()
            .map(|r| r.event_id.clone())
            .chain(sales.iter().map(|s| s.event_id.clone()));
        for id in ids {
            if !id.is_empty() && !events.iter().any(|e| e.id == id) {
                events.push(EventSummary {
                    id: id.clone(),
                    name: format!("Event {id}"),
                    ..Default::default()
                });
            }
        }

        Ok(events)
    }

    fn inventory(&self, event_id: &str) -> AppResult<Vec<InventoryRecord>> {
        Ok(self
            .read_list::<InventoryRecord>(INVENTORY_FILE)?
            .into_iter()
            .filter(|r| r.event_id == event_id)
            .collect())
    }

    fn sales(&self, event_id: &str) -> AppResult<Vec<SaleRecord>> {
        Ok(self
            .read_list::<SaleRecord>(SALES_FILE)?
            .into_iter()
            .filter(|s| s.event_id == event_id)
            .collect())
    }
}
