//! Tag based status classification.

use crate::models::{InventoryStatus, SaleStatus};

/// Lowercase and drop hyphens, underscores and whitespace:
/// "Pre-Sale", "pre sale" and "presale" all compare equal.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| !(c.is_whitespace() || *c == '-' || *c == '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn has_any<S: AsRef<str>>(tags: &[S], wanted: &[&str]) -> bool {
    tags.iter()
        .map(|t| normalize_tag(t.as_ref()))
        .any(|t| wanted.contains(&t.as_str()))
}

pub fn is_concern<S: AsRef<str>>(tags: &[S]) -> bool {
    has_any(tags, &["concern", "concerned"])
}

pub fn is_presale<S: AsRef<str>>(tags: &[S]) -> bool {
    has_any(tags, &["presale", "presell"])
}

/// Concern > In Hand > TN Delivered > En Route > Good Tickets.
pub fn classify_inventory_status<S: AsRef<str>>(tags: &[S]) -> InventoryStatus {
    if is_concern(tags) {
        InventoryStatus::Concern
    } else if has_any(tags, &["delivered"]) {
        InventoryStatus::InHand
    } else if has_any(tags, &["tndelivered"]) {
        InventoryStatus::TnDelivered
    } else if has_any(tags, &["tngiven"]) {
        InventoryStatus::EnRoute
    } else {
        InventoryStatus::GoodTickets
    }
}

/// Concern > Unfilled (presale) > Filled - Pending Shipment.
///
/// Every other tag collapses into the filled bucket, including the delivery
/// states the inventory side tells apart.
pub fn classify_sale_status<S: AsRef<str>>(tags: &[S]) -> SaleStatus {
    if is_concern(tags) {
        SaleStatus::Concern
    } else if is_presale(tags) {
        SaleStatus::Unfilled
    } else {
        SaleStatus::FilledPendingShipment
    }
}
