mod common;

use common::{inv, sale};
use tixdesk::core::reconcile::{
    Dashboard, aggregate_inventory, aggregate_sales, categorize, differential, reconcile,
    unfilled_sales_counts,
};
use tixdesk::models::{
    Category, CategoryCounts, EventSummary, InventoryStatus, ManualOverrides, SaleItem,
    SaleRecord, SaleStatus,
};

fn no_overrides() -> ManualOverrides {
    ManualOverrides::new()
}

#[test]
fn concern_bypasses_categorization() {
    let records = vec![
        inv("1", "GA PIT", 5, &[]),
        inv("2", "VIP Lounge", 2, &["concern"]),
    ];

    let agg = aggregate_inventory(&records, &no_overrides());

    assert_eq!(
        agg.category_counts,
        CategoryCounts::from([
            (Category::Ga, 5),
            (Category::Vip, 0),
            (Category::Concern, 2),
            (Category::GaPlus, 0),
            (Category::Shuttle, 0),
        ])
    );
    assert!(agg.uncategorized.is_empty());
}

#[test]
fn every_tracked_category_is_reported_even_when_empty() {
    let agg = aggregate_inventory(&[], &no_overrides());
    for c in Category::TRACKED {
        assert_eq!(agg.category_counts.get(c), 0);
    }
    assert_eq!(agg.category_counts.iter().count(), Category::TRACKED.len());

    let json = serde_json::to_value(&agg.category_counts).unwrap();
    assert_eq!(json["GA_PLUS"], 0);
    assert_eq!(json["CONCERN"], 0);
}

#[test]
fn override_places_an_unknown_section() {
    let mut overrides = ManualOverrides::new();
    overrides.insert("Club 100", Category::Vip);
    let records = vec![inv("1", "Club 100", 4, &[])];

    let agg = aggregate_inventory(&records, &overrides);

    assert_eq!(agg.category_counts.get(Category::Vip), 4);
    assert!(agg.uncategorized.iter().all(|u| u.section != "Club 100"));
}

#[test]
fn unknown_sections_go_to_triage_merged_by_label() {
    let records = vec![
        inv("1", "Balcony", 2, &[]),
        inv("2", "Suite A", 1, &[]),
        inv("3", "Balcony", 3, &[]),
    ];

    let agg = aggregate_inventory(&records, &no_overrides());

    assert_eq!(agg.category_counts.total(), 0);
    assert_eq!(agg.uncategorized.len(), 2);
    assert_eq!(agg.uncategorized[0].section, "Balcony");
    assert_eq!(agg.uncategorized[0].quantity, 5);
    assert_eq!(agg.uncategorized_units(), 6);
}

#[test]
fn presale_inventory_is_excluded_and_every_unit_is_accounted_for() {
    let records = vec![
        inv("1", "GA", 10, &[]),
        inv("2", "Floor", 4, &["Pre-Sale"]),
        inv("3", "VIP", 3, &["concerned"]),
        inv("4", "Balcony", 2, &["delivered"]),
        inv("5", "Shuttle", 1, &["presell", "concern"]),
    ];
    let total: i64 = records.iter().map(|r| r.available_now).sum();

    let agg = aggregate_inventory(&records, &no_overrides());

    assert_eq!(agg.excluded_presale, 5);
    assert_eq!(agg.category_counts.get(Category::Ga), 10);
    assert_eq!(agg.category_counts.get(Category::Concern), 3);
    assert_eq!(agg.accounted_units(), total);
    assert_eq!(agg.status_counts[&InventoryStatus::InHand], 2);
    assert_eq!(agg.status_counts[&InventoryStatus::Concern], 3);
}

#[test]
fn aggregation_is_repeatable() {
    let records = vec![
        inv("1", "GA", 10, &["tngiven"]),
        inv("2", "Mystery", 4, &[]),
        inv("3", "VIP", 3, &["concern"]),
    ];
    let overrides = no_overrides();
    assert_eq!(
        aggregate_inventory(&records, &overrides),
        aggregate_inventory(&records, &overrides)
    );
}

#[test]
fn presale_sale_item_without_listing_is_unfilled() {
    let sales = vec![sale("S1", vec![SaleItem::new("Floor", 3, &["Pre-Sale"])])];

    let agg = aggregate_sales(&sales, &no_overrides());

    assert_eq!(agg.status_counts[&SaleStatus::Unfilled], 3);
    assert_eq!(agg.unfilled_counts.get(Category::Ga), 3);
    assert_eq!(agg.category_counts.get(Category::Ga), 3);
}

#[test]
fn sale_items_fall_back_to_order_tags_and_quantity_chain() {
    let mut order = SaleRecord::new(
        "S1",
        vec![
            SaleItem {
                section: "VIP".into(),
                ticket_quantity: Some(2),
                ..Default::default()
            },
            SaleItem {
                section: "GA+".into(),
                available_now: Some(4),
                tags: Some(vec!["delivered".into()]),
                ..Default::default()
            },
            SaleItem {
                section: "Shuttle".into(),
                ..Default::default()
            },
        ],
    );
    order.tags = vec!["presale".into()];

    let agg = aggregate_sales(&[order], &no_overrides());

    assert_eq!(agg.unfilled_counts.get(Category::Vip), 2);
    assert_eq!(agg.unfilled_counts.get(Category::Shuttle), 1);
    assert_eq!(agg.unfilled_counts.get(Category::GaPlus), 0);
    assert_eq!(agg.category_counts.get(Category::GaPlus), 4);
    assert_eq!(agg.status_counts[&SaleStatus::FilledPendingShipment], 4);
    assert_eq!(agg.orders, 1);
}

#[test]
fn listing_tags_decide_sale_status() {
    let inventory = vec![
        inv("L1", "Floor", 2, &["presale"]),
        inv("L2", "VIP", 2, &["concern"]),
    ];
    let sales = vec![sale(
        "S1",
        vec![
            SaleItem::new("", 1, &[]).for_listing("L1"),
            SaleItem::new("VIP", 2, &["presale"]).for_listing("L2"),
        ],
    )];

    let unfilled = unfilled_sales_counts(&sales, &inventory, &no_overrides());

    // L1 section comes from the listing; L2 is concern on the listing side.
    assert_eq!(unfilled.get(Category::Ga), 1);
    assert_eq!(unfilled.get(Category::Vip), 0);
    assert_eq!(unfilled.get(Category::Concern), 0);
}

#[test]
fn differential_total_ignores_concern() {
    let inventory = CategoryCounts::from([(Category::Concern, 50), (Category::Ga, 10)]);

    let diff = differential(&inventory, &CategoryCounts::new());

    assert_eq!(diff.total, 10);
    assert!(!diff.per_category.contains_key(&Category::Concern));
    assert_eq!(diff.per_category.len(), 4);
}

#[test]
fn differential_can_go_negative() {
    let inventory = CategoryCounts::from([(Category::Vip, 2), (Category::Ga, 5)]);
    let unfilled = CategoryCounts::from([(Category::Vip, 5), (Category::Ga, 1)]);

    let diff = differential(&inventory, &unfilled);

    assert_eq!(diff.get(Category::Vip), -3);
    assert_eq!(diff.get(Category::Ga), 4);
    assert_eq!(diff.total, 1);
}

#[test]
fn reconcile_combines_both_sides() {
    let inventory = vec![inv("L1", "Floor", 6, &[]), inv("L2", "GA+", 2, &["presale"])];
    let sales = vec![sale(
        "S1",
        vec![
            SaleItem::new("GA+", 2, &[]).for_listing("L2"),
            SaleItem::new("Floor", 1, &["delivered"]).for_listing("L1"),
        ],
    )];

    let r = reconcile(&inventory, &sales, &no_overrides());

    assert_eq!(r.inventory.category_counts.get(Category::Ga), 6);
    assert_eq!(r.inventory.excluded_presale, 2);
    assert_eq!(r.sales.unfilled_counts.get(Category::GaPlus), 2);
    assert_eq!(r.differential.get(Category::GaPlus), -2);
    assert_eq!(r.differential.get(Category::Ga), 6);
    assert_eq!(r.differential.total, 4);
}

#[test]
fn dashboard_groups_by_event_and_adds_unlisted_ids() {
    let events = vec![EventSummary {
        id: "E1".into(),
        name: "Summer Fest".into(),
        ..Default::default()
    }];
    let inventory = vec![
        inv("L1", "GA", 3, &[]).with_event("E1"),
        inv("L2", "VIP", 2, &[]).with_event("E9"),
    ];
    let sales = vec![sale("S1", vec![SaleItem::new("GA", 1, &["presale"])]).with_event("E1")];

    let dash = Dashboard::build(&events, &inventory, &sales, &no_overrides());

    assert_eq!(dash.events.len(), 2);
    assert_eq!(dash.events[0].event.id, "E1");
    assert_eq!(dash.events[0].result.differential.total, 2);
    assert_eq!(dash.events[1].event.id, "E9");
    assert!(dash.events[1].event.placeholder);
    assert_eq!(dash.events[1].result.differential.total, 2);
    assert_eq!(dash.overall.differential.total, 4);
}

#[test]
fn override_wins_over_a_matching_rule() {
    assert_eq!(categorize(Some("GA PIT")), Category::Ga);

    let mut overrides = ManualOverrides::new();
    overrides.insert("GA PIT", Category::Vip);
    let records = vec![inv("1", "GA PIT", 6, &[]), inv("2", "Lawn", 2, &[])];

    let agg = aggregate_inventory(&records, &overrides);

    assert_eq!(agg.category_counts.get(Category::Vip), 6);
    assert_eq!(agg.category_counts.get(Category::Ga), 2);

    let sales = vec![sale("S1", vec![SaleItem::new("GA PIT", 3, &["presale"])])];
    let sold = aggregate_sales(&sales, &overrides);
    assert_eq!(sold.unfilled_counts.get(Category::Vip), 3);
    assert_eq!(sold.unfilled_counts.get(Category::Ga), 0);
}

#[test]
fn huge_feed_counts_saturate_instead_of_overflowing() {
    let records = vec![
        inv("1", "GA", i64::MAX, &[]),
        inv("2", "GA", 5, &[]),
        inv("3", "Balcony", i64::MAX, &[]),
        inv("4", "Balcony", 1, &[]),
        inv("5", "Floor", i64::MAX, &["presale"]),
        inv("6", "Floor", 7, &["presale"]),
    ];

    let agg = aggregate_inventory(&records, &no_overrides());

    assert_eq!(agg.category_counts.get(Category::Ga), i64::MAX);
    assert_eq!(agg.status_counts[&InventoryStatus::GoodTickets], i64::MAX);
    assert_eq!(agg.uncategorized[0].quantity, i64::MAX);
    assert_eq!(agg.excluded_presale, i64::MAX);
    assert_eq!(agg.accounted_units(), i64::MAX);

    let sales = vec![sale(
        "S1",
        vec![
            SaleItem::new("GA", i64::MAX, &["presale"]),
            SaleItem::new("GA", 3, &["presale"]),
        ],
    )];
    let sold = aggregate_sales(&sales, &no_overrides());
    assert_eq!(sold.status_counts[&SaleStatus::Unfilled], i64::MAX);
    assert_eq!(sold.unfilled_counts.get(Category::Ga), i64::MAX);

    let diff = differential(&sold.unfilled_counts, &agg.category_counts);
    assert_eq!(diff.get(Category::Ga), 0);

    let mut oversold = CategoryCounts::new();
    oversold.add(Category::Vip, i64::MAX);
    oversold.add(Category::Shuttle, i64::MAX);
    let diff = differential(&oversold, &CategoryCounts::new());
    assert_eq!(diff.total, i64::MAX);
}
