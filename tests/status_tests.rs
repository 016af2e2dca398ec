use tixdesk::core::reconcile::{
    classify_inventory_status, classify_sale_status, is_presale, normalize_tag,
};
use tixdesk::models::{InventoryStatus, SaleStatus};

#[test]
fn tags_normalize_across_spelling() {
    assert_eq!(normalize_tag("Pre-Sale"), "presale");
    assert_eq!(normalize_tag("pre sale"), "presale");
    assert_eq!(normalize_tag("TN_Delivered"), "tndelivered");
    assert!(is_presale(&["PRE SELL"]));
}

#[test]
fn tn_delivered_spellings_classify_the_same() {
    assert_eq!(
        classify_inventory_status(&["TN-Delivered"]),
        InventoryStatus::TnDelivered
    );
    assert_eq!(
        classify_inventory_status(&["tndelivered"]),
        InventoryStatus::TnDelivered
    );
}

#[test]
fn inventory_precedence() {
    assert_eq!(
        classify_inventory_status(&["delivered", "concerned"]),
        InventoryStatus::Concern
    );
    assert_eq!(
        classify_inventory_status(&["tndelivered", "delivered"]),
        InventoryStatus::InHand
    );
    assert_eq!(
        classify_inventory_status(&["tngiven", "tn-delivered"]),
        InventoryStatus::TnDelivered
    );
    assert_eq!(classify_inventory_status(&["TN Given"]), InventoryStatus::EnRoute);
    assert_eq!(
        classify_inventory_status::<&str>(&[]),
        InventoryStatus::GoodTickets
    );
    assert_eq!(
        classify_inventory_status(&["something else"]),
        InventoryStatus::GoodTickets
    );
}

#[test]
fn sale_precedence_and_collapse() {
    assert_eq!(
        classify_sale_status(&["presale", "Concern"]),
        SaleStatus::Concern
    );
    assert_eq!(classify_sale_status(&["pre-sale"]), SaleStatus::Unfilled);
    assert_eq!(classify_sale_status(&["presell"]), SaleStatus::Unfilled);
    assert_eq!(
        classify_sale_status(&["delivered"]),
        SaleStatus::FilledPendingShipment
    );
    assert_eq!(
        classify_sale_status::<String>(&[]),
        SaleStatus::FilledPendingShipment
    );
}
