pub mod checklist;
pub(crate) mod db_utils;
pub mod initialize;
pub mod listings;
pub mod log;
pub mod migrate;
pub mod overrides;
pub mod pool;
pub mod stats;
