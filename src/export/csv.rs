use super::model::ReconciliationRow;
use crate::errors::AppResult;
use std::path::Path;

/// Header row comes from the serde field names of `ReconciliationRow`.
pub fn write_csv(path: &Path, rows: &[ReconciliationRow]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
