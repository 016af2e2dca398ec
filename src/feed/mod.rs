//! Where inventory and sales snapshots come from.
//!
//! Lookups are issued per event and independently: one event failing to load
//! is recorded in the bundle and the others still come through.

mod envelope;
pub mod snapshot;
pub mod zerohero;

pub use snapshot::SnapshotFeed;
pub use zerohero::ZeroHeroClient;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{EventSummary, InventoryRecord, SaleRecord};
use crate::utils::path::expand_tilde;

pub trait FeedSource {
    /// Short name for messages ("snapshot /path", "zerohero https://...").
    fn describe(&self) -> String;
    fn events(&self) -> AppResult<Vec<EventSummary>>;
    fn inventory(&self, event_id: &str) -> AppResult<Vec<InventoryRecord>>;
    fn sales(&self, event_id: &str) -> AppResult<Vec<SaleRecord>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFailure {
    pub event_id: String,
    pub what: &'static str,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct FeedBundle {
    /// `FeedSource::describe` of the source the bundle came from.
    pub source: String,
    pub events: Vec<EventSummary>,
    pub inventory: Vec<InventoryRecord>,
    pub sales: Vec<SaleRecord>,
    pub failures: Vec<FeedFailure>,
}

/// Pick the source: an explicit snapshot dir, then the configured one, then
/// the ZeroHero API.
pub fn open_source(cfg: &Config, feed_dir: Option<&str>) -> AppResult<Box<dyn FeedSource>> {
    let dir = feed_dir
        .map(str::to_string)
        .or_else(|| cfg.feed_dir.clone())
        .filter(|d| !d.trim().is_empty());

    match dir {
        Some(d) => Ok(Box::new(SnapshotFeed::new(expand_tilde(&d)))),
        None => Ok(Box::new(ZeroHeroClient::from_config(&cfg.zerohero)?)),
    }
}

/// Load events, inventory and sales for `event_ids` (all listed events when
/// empty).
pub fn collect(source: &dyn FeedSource, event_ids: &[String]) -> AppResult<FeedBundle> {
    let mut bundle = FeedBundle {
        source: source.describe(),
        ..Default::default()
    };

    let listed = if event_ids.is_empty() {
        source.events()?
    } else {
        match source.events() {
            Ok(list) => list,
            Err(e) => {
                bundle.failures.push(FeedFailure {
                    event_id: "*".to_string(),
                    what: "events",
                    error: e.to_string(),
                });
                Vec::new()
            }
        }
    };

    let wanted: Vec<String> = if event_ids.is_empty() {
        listed.iter().map(|e| e.id.clone()).collect()
    } else {
        event_ids.to_vec()
    };

    for id in &wanted {
        let summary = listed
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .unwrap_or_else(|| EventSummary::placeholder(id));
        bundle.events.push(summary);

        match source.inventory(id) {
            Ok(records) => bundle
                .inventory
                .extend(records.into_iter().map(|mut r| {
                    if r.event_id.is_empty() {
                        r.event_id = id.clone();
                    }
                    r
                })),
            Err(e) => bundle.failures.push(FeedFailure {
                event_id: id.clone(),
                what: "inventory",
                error: e.to_string(),
            }),
        }

        match source.sales(id) {
            Ok(records) => bundle.sales.extend(records.into_iter().map(|mut s| {
                if s.event_id.is_empty() {
                    s.event_id = id.clone();
                }
                s
            })),
            Err(e) => bundle.failures.push(FeedFailure {
                event_id: id.clone(),
                what: "sales",
                error: e.to_string(),
            }),
        }
    }

    Ok(bundle)
}
