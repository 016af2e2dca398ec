//! Folding of inventory and sales snapshots into category and status buckets.

use super::categorize::categorize;
use super::status::{classify_inventory_status, classify_sale_status, is_concern, is_presale};
use crate::models::{
    Category, CategoryCounts, InventoryRecord, InventoryStatus, ManualOverrides, SaleItem,
    SaleRecord, SaleStatus,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A section no rule or override could place, kept for operator triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncategorizedSection {
    pub section: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryAggregate {
    pub category_counts: CategoryCounts,
    pub status_counts: BTreeMap<InventoryStatus, i64>,
    pub uncategorized: Vec<UncategorizedSection>,
    /// Units skipped because the listing is tagged presale.
    pub excluded_presale: i64,
}

impl InventoryAggregate {
    pub fn uncategorized_units(&self) -> i64 {
        self.uncategorized
            .iter()
            .fold(0, |acc, u| acc.saturating_add(u.quantity))
    }

    /// Every unit lands in exactly one of: a category bucket, the
    /// uncategorized list or the presale exclusion.
    pub fn accounted_units(&self) -> i64 {
        self.category_counts
            .total()
            .saturating_add(self.uncategorized_units())
            .saturating_add(self.excluded_presale)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesAggregate {
    pub category_counts: CategoryCounts,
    /// Units of items classified Unfilled, per category.
    pub unfilled_counts: CategoryCounts,
    pub status_counts: BTreeMap<SaleStatus, i64>,
    pub uncategorized: Vec<UncategorizedSection>,
    pub orders: usize,
}

/// Inventory records by listing id, used to resolve sale items.
#[derive(Debug, Default)]
pub struct ListingIndex<'a>(HashMap<&'a str, &'a InventoryRecord>);

impl<'a> ListingIndex<'a> {
    pub fn new(records: &'a [InventoryRecord]) -> Self {
        Self(
            records
                .iter()
                .filter(|r| !r.id.is_empty())
                .map(|r| (r.id.as_str(), r))
                .collect(),
        )
    }

    pub fn get(&self, listing_id: Option<&str>) -> Option<&'a InventoryRecord> {
        listing_id.and_then(|id| self.0.get(id).copied())
    }
}

/// Uncategorized sections merged by label, in first-seen order.
#[derive(Default)]
struct Triage {
    rows: Vec<UncategorizedSection>,
    index: HashMap<String, usize>,
}

impl Triage {
    fn push(&mut self, section: &str, quantity: i64) {
        match self.index.get(section) {
            Some(i) => {
                let row = &mut self.rows[*i];
                row.quantity = row.quantity.saturating_add(quantity);
            }
            None => {
                self.index.insert(section.to_string(), self.rows.len());
                self.rows.push(UncategorizedSection {
                    section: section.to_string(),
                    quantity,
                });
            }
        }
    }

    fn finish(self) -> Vec<UncategorizedSection> {
        self.rows
    }
}

/// Feed counts are untrusted; sums clamp at `i64::MAX` instead of overflowing.
fn add_units<K: Ord>(counts: &mut BTreeMap<K, i64>, key: K, units: i64) {
    let slot = counts.entry(key).or_insert(0);
    *slot = slot.saturating_add(units);
}

/// Category for a section label: a manual override for the exact label wins,
/// otherwise the heuristic rules decide.
pub fn resolve_category(section: &str, overrides: &ManualOverrides) -> Category {
    overrides
        .get(section)
        .or_else(|| overrides.get(section.trim()))
        .unwrap_or_else(|| categorize(Some(section)))
}

pub fn aggregate_inventory(
    records: &[InventoryRecord],
    overrides: &ManualOverrides,
) -> InventoryAggregate {
    let mut category_counts = CategoryCounts::new();
    let mut status_counts: BTreeMap<InventoryStatus, i64> =
        InventoryStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut triage = Triage::default();
    let mut excluded_presale: i64 = 0;

    for record in records {
        let units = record.available_now.max(0);

        if is_presale(&record.tags) {
            excluded_presale = units.saturating_add(excluded_presale);
            continue;
        }

        add_units(&mut status_counts, classify_inventory_status(&record.tags), units);

        if is_concern(&record.tags) {
            category_counts.add(Category::Concern, units);
            continue;
        }

        match resolve_category(&record.section, overrides) {
            Category::Uncategorized => triage.push(&record.section, units),
            category => category_counts.add(category, units),
        }
    }

    InventoryAggregate {
        category_counts,
        status_counts,
        uncategorized: triage.finish(),
        excluded_presale,
    }
}

/// Sales aggregate using only the tags carried by the sales feed.
pub fn aggregate_sales(sales: &[SaleRecord], overrides: &ManualOverrides) -> SalesAggregate {
    aggregate_sales_with_listings(sales, &ListingIndex::default(), overrides)
}

/// Tags that decide an item's status: the matched listing's tags, else the
/// item's own, else the order's.
pub fn effective_tags<'a>(
    sale: &'a SaleRecord,
    item: &'a SaleItem,
    listing: Option<&'a InventoryRecord>,
) -> &'a [String] {
    listing
        .map(|l| l.tags.as_slice())
        .filter(|t| !t.is_empty())
        .or_else(|| item.own_tags())
        .unwrap_or(sale.tags.as_slice())
}

fn effective_section<'a>(item: &'a SaleItem, listing: Option<&'a InventoryRecord>) -> &'a str {
    if !item.section.trim().is_empty() {
        return &item.section;
    }
    listing.map(|l| l.section.as_str()).unwrap_or("")
}

pub fn aggregate_sales_with_listings(
    sales: &[SaleRecord],
    listings: &ListingIndex<'_>,
    overrides: &ManualOverrides,
) -> SalesAggregate {
    let mut category_counts = CategoryCounts::new();
    let mut unfilled_counts = CategoryCounts::new();
    let mut status_counts: BTreeMap<SaleStatus, i64> =
        SaleStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut triage = Triage::default();

    for sale in sales {
        for item in &sale.items {
            let listing = listings.get(item.listing_id.as_deref());
            let tags = effective_tags(sale, item, listing);
            let units = item.resolved_quantity();
            let status = classify_sale_status(tags);

            add_units(&mut status_counts, status, units);

            if status == SaleStatus::Concern {
                category_counts.add(Category::Concern, units);
                continue;
            }

            let section = effective_section(item, listing);
            match resolve_category(section, overrides) {
                Category::Uncategorized => triage.push(section, units),
                category => {
                    category_counts.add(category, units);
                    if status == SaleStatus::Unfilled {
                        unfilled_counts.add(category, units);
                    }
                }
            }
        }
    }

    SalesAggregate {
        category_counts,
        unfilled_counts,
        status_counts,
        uncategorized: triage.finish(),
        orders: sales.len(),
    }
}
