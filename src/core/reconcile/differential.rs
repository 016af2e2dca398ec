use super::aggregate::{ListingIndex, aggregate_sales_with_listings};
use crate::models::{Category, CategoryCounts, InventoryRecord, ManualOverrides, SaleRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Supply minus unresolved demand. Negative values mean oversold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Differential {
    pub per_category: BTreeMap<Category, i64>,
    /// Sum over sellable categories; CONCERN never contributes.
    pub total: i64,
}

impl Differential {
    pub fn get(&self, category: Category) -> i64 {
        self.per_category.get(&category).copied().unwrap_or(0)
    }
}

pub fn differential(inventory: &CategoryCounts, unfilled: &CategoryCounts) -> Differential {
    let per_category: BTreeMap<Category, i64> = Category::SELLABLE
        .iter()
        .map(|c| (*c, inventory.get(*c).saturating_sub(unfilled.get(*c))))
        .collect();
    let total = per_category
        .values()
        .fold(0i64, |acc, n| acc.saturating_add(*n));

    Differential {
        per_category,
        total,
    }
}

/// Units of sale items that are tagged presale and not concern, resolved
/// against the inventory listings they reference.
pub fn unfilled_sales_counts(
    sales: &[SaleRecord],
    inventory: &[InventoryRecord],
    overrides: &ManualOverrides,
) -> CategoryCounts {
    let listings = ListingIndex::new(inventory);
    aggregate_sales_with_listings(sales, &listings, overrides).unfilled_counts
}
