//! Unified application error type.
//! Store, feed, config and cli code all return AppError so the binary has a
//! single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Feed / serialization
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feed error: {0}")]
    Feed(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid checklist kind: {0}")]
    InvalidChecklistKind(String),

    #[error("Invalid milestone list: {0}")]
    InvalidMilestones(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No checklist item {kind}:{subject} for user {user}")]
    UnknownChecklistItem {
        user: String,
        kind: String,
        subject: String,
    },

    #[error("No override for section '{0}'")]
    UnknownOverride(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
