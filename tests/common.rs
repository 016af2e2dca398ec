#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tixdesk::models::{InventoryRecord, SaleItem, SaleRecord};

/// An isolated HOME with its own database and snapshot directory.
pub struct TestEnv {
    pub root: TempDir,
    pub db: String,
    pub feed_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let db = root.path().join("tixdesk_test.sqlite");
        let feed_dir = root.path().join("feed");
        fs::create_dir_all(&feed_dir).expect("feed dir");
        Self {
            db: db.to_string_lossy().to_string(),
            feed_dir,
            root,
        }
    }

    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Binary with HOME pointed at the temp dir, the test DB and a fixed user.
    pub fn tix(&self) -> Command {
        self.tix_as("tester")
    }

    pub fn tix_as(&self, user: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("tixdesk");
        cmd.env("HOME", self.home())
            .env_remove("ZEROHERO_API_KEY")
            .args(["--db", &self.db, "--user", user]);
        cmd
    }

    pub fn init(&self) -> &Self {
        self.tix().args(["--test", "init"]).assert().success();
        self
    }

    pub fn feed_arg(&self) -> String {
        self.feed_dir.to_string_lossy().to_string()
    }

    pub fn write_feed(&self, file: &str, json: Value) {
        fs::write(
            self.feed_dir.join(file),
            serde_json::to_string_pretty(&json).expect("json"),
        )
        .expect("write feed file");
    }

    /// Two events: E1 with a mix of sections and tags, E2 with one listing.
    pub fn write_sample_feed(&self) {
        self.write_feed(
            "events.json",
            serde_json::json!([
                { "id": "E1", "name": "Summer Fest", "venue": "Riverside Park", "date": "2025-07-12" },
                { "id": 2, "name": "Winter Gala" }
            ]),
        );
        self.write_feed(
            "inventory.json",
            serde_json::json!({ "data": [
                { "id": "L1", "eventId": "E1", "section": "GA PIT", "availableNow": 5, "tags": [] },
                { "id": "L2", "eventId": "E1", "section": "VIP Lounge", "availableNow": 2, "tags": ["concern"] },
                { "id": "L3", "eventId": "E1", "section": "Balcony", "availableNow": "3", "tags": "delivered" },
                { "id": "L4", "eventId": "E1", "section": "Floor", "availableNow": 4, "tags": ["Pre-Sale"] },
                { "id": "L5", "eventId": 2, "section": "Shuttle Bus A", "availableNow": 6, "tags": null }
            ]}),
        );
        self.write_feed(
            "sales.json",
            serde_json::json!([
                { "id": "S1", "eventId": "E1", "items": [
                    { "listingId": "L4", "section": "Floor", "quantity": 3 }
                ]},
                { "id": "S2", "eventId": "E1", "tags": ["tn-delivered"], "items": [
                    { "section": "GA PIT", "ticketQuantity": 2 }
                ]}
            ]),
        );
    }
}

pub fn inv(id: &str, section: &str, available: i64, tags: &[&str]) -> InventoryRecord {
    InventoryRecord::new(id, section, available, tags)
}

pub fn sale(id: &str, items: Vec<SaleItem>) -> SaleRecord {
    SaleRecord::new(id, items)
}
