pub mod checklist;
pub mod config;
pub mod db;
pub mod events;
pub mod export;
pub mod init;
pub mod listing;
pub mod log;
pub mod overrides;
pub mod reconcile;
pub mod sections;
