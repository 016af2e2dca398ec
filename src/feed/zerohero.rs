use super::FeedSource;
use super::envelope::Envelope;
use crate::config::ZeroHeroConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{EventSummary, InventoryRecord, SaleRecord};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Read-only client for the ZeroHero ticketing API.
pub struct ZeroHeroClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl ZeroHeroClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout_seconds: u64) -> AppResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::Config(
                "zerohero.base_url is not set (or pass --feed-dir to use snapshots)".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(3)))
            .user_agent(concat!("tixdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    pub fn from_config(cfg: &ZeroHeroConfig) -> AppResult<Self> {
        Self::new(&cfg.base_url, cfg.resolve_api_key(), cfg.timeout_seconds)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get_list<T: DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let mut req = self.http.get(self.endpoint(path));
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let body: Envelope<T> = req.send()?.error_for_status()?.json()?;
        Ok(body.into_vec())
    }
}

impl FeedSource for ZeroHeroClient {
    fn describe(&self) -> String {
        format!("zerohero {}", self.base_url)
    }

    fn events(&self) -> AppResult<Vec<EventSummary>> {
        self.get_list("events")
    }

    fn inventory(&self, event_id: &str) -> AppResult<Vec<InventoryRecord>> {
        self.get_list(&format!("events/{}/inventory", event_id))
    }

    fn sales(&self, event_id: &str) -> AppResult<Vec<SaleRecord>> {
        self.get_list(&format!("events/{}/sales", event_id))
    }
}
