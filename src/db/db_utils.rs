//! Row conversion helpers shared by the query modules.

use crate::errors::AppError;
use chrono::{DateTime, Local};
use rusqlite::types::Type;

/// Wrap a domain parse failure so it can travel through `query_map`.
pub(crate) fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

pub(crate) fn parse_timestamp(col: usize, raw: &str) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(col, AppError::InvalidTimestamp(raw.to_string())))
}

pub(crate) fn parse_opt_timestamp(
    col: usize,
    raw: Option<String>,
) -> rusqlite::Result<Option<DateTime<Local>>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| parse_timestamp(col, &s))
        .transpose()
}

pub(crate) fn parse_json_list<T: serde::de::DeserializeOwned>(
    col: usize,
    raw: &str,
) -> rusqlite::Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| conversion_error(col, AppError::Json(e)))
}

pub(crate) fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}
