//! Inventory/sales reconciliation.
//!
//! Pure functions over in-memory snapshots: section categorization, tag based
//! status classification, aggregation into buckets and the supply/demand
//! differential. Nothing here touches the store or the network.

pub mod aggregate;
pub mod categorize;
pub mod differential;
pub mod report;
pub mod status;

pub use aggregate::{
    InventoryAggregate, ListingIndex, SalesAggregate, UncategorizedSection, aggregate_inventory,
    aggregate_sales, aggregate_sales_with_listings, resolve_category,
};
pub use categorize::{categorize, categorize_with_rule};
pub use differential::{Differential, differential, unfilled_sales_counts};
pub use report::{Dashboard, EventReconciliation, Reconciliation, reconcile};
pub use status::{
    classify_inventory_status, classify_sale_status, is_concern, is_presale, normalize_tag,
};
