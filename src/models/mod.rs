pub mod category;
pub mod checklist;
pub(crate) mod de;
pub mod event;
pub mod inventory;
pub mod listing;
pub mod overrides;
pub mod sale;
pub mod status;

pub use category::{Category, CategoryCounts};
pub use checklist::{ChecklistItem, ChecklistKind, ResetSchedule, ResetState};
pub use event::EventSummary;
pub use inventory::InventoryRecord;
pub use listing::ListingFlags;
pub use overrides::{CategoryOverride, ManualOverrides};
pub use sale::{SaleItem, SaleRecord};
pub use status::{InventoryStatus, SaleStatus};
