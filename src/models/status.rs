use serde::Serialize;
use std::fmt;

/// Fulfilment state of an inventory listing, derived from its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum InventoryStatus {
    Concern,
    InHand,
    TnDelivered,
    EnRoute,
    GoodTickets,
}

impl InventoryStatus {
    pub const ALL: [InventoryStatus; 5] = [
        InventoryStatus::Concern,
        InventoryStatus::InHand,
        InventoryStatus::TnDelivered,
        InventoryStatus::EnRoute,
        InventoryStatus::GoodTickets,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InventoryStatus::Concern => "Concern",
            InventoryStatus::InHand => "In Hand",
            InventoryStatus::TnDelivered => "TN Delivered",
            InventoryStatus::EnRoute => "En Route",
            InventoryStatus::GoodTickets => "Good Tickets",
        }
    }
}

impl fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of a sold line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SaleStatus {
    Concern,
    Unfilled,
    FilledPendingShipment,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Concern,
        SaleStatus::Unfilled,
        SaleStatus::FilledPendingShipment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Concern => "Concern",
            SaleStatus::Unfilled => "Unfilled",
            SaleStatus::FilledPendingShipment => "Filled - Pending Shipment",
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
