use super::model::ReconciliationRow;
use crate::errors::AppResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_json(path: &Path, rows: &[ReconciliationRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
