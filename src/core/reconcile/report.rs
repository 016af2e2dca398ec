//! Per-event and overall reconciliation, as shown on the dashboard.

use super::aggregate::{
    InventoryAggregate, ListingIndex, SalesAggregate, aggregate_inventory,
    aggregate_sales_with_listings,
};
use super::differential::{Differential, differential};
use crate::models::{EventSummary, InventoryRecord, ManualOverrides, SaleRecord};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub inventory: InventoryAggregate,
    pub sales: SalesAggregate,
    pub differential: Differential,
}

/// Inventory aggregate, sales aggregate and their differential for one
/// consistent set of records.
pub fn reconcile(
    inventory: &[InventoryRecord],
    sales: &[SaleRecord],
    overrides: &ManualOverrides,
) -> Reconciliation {
    let listings = ListingIndex::new(inventory);
    let inventory = aggregate_inventory(inventory, overrides);
    let sales = aggregate_sales_with_listings(sales, &listings, overrides);
    let differential = differential(&inventory.category_counts, &sales.unfilled_counts);

    Reconciliation {
        inventory,
        sales,
        differential,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReconciliation {
    pub event: EventSummary,
    #[serde(flatten)]
    pub result: Reconciliation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub events: Vec<EventReconciliation>,
    pub overall: Reconciliation,
}

impl Dashboard {
    /// Groups records by event id. Events are listed in the order given,
    /// followed by any event id that only appears in the records.
    pub fn build(
        events: &[EventSummary],
        inventory: &[InventoryRecord],
        sales: &[SaleRecord],
        overrides: &ManualOverrides,
    ) -> Self {
        let mut ordered: Vec<EventSummary> = events.to_vec();
        let mut seen: BTreeSet<String> = events.iter().map(|e| e.id.clone()).collect();

        let record_ids = inventory
            .iter()
            .map(|r| r.event_id.as_str())
            .chain(sales.iter().map(|s| s.event_id.as_str()));
        for id in record_ids {
            if seen.insert(id.to_string()) {
                ordered.push(EventSummary::placeholder(id));
            }
        }

        let per_event = ordered
            .into_iter()
            .map(|event| {
                let inv: Vec<InventoryRecord> = inventory
                    .iter()
                    .filter(|r| r.event_id == event.id)
                    .cloned()
                    .collect();
                let sold: Vec<SaleRecord> = sales
                    .iter()
                    .filter(|s| s.event_id == event.id)
                    .cloned()
                    .collect();

                EventReconciliation {
                    result: reconcile(&inv, &sold, overrides),
                    event,
                }
            })
            .collect();

        Dashboard {
            events: per_event,
            overall: reconcile(inventory, sales, overrides),
        }
    }
}
