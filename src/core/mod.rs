pub mod checklist;
pub mod config;
pub mod dashboard;
pub mod listing;
pub mod log;
pub mod overrides;
pub mod reconcile;
pub mod schedule;
