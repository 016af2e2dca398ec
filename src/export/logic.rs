use crate::core::reconcile::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::rows_from_dashboard;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the per-event reconciliation of `dashboard` to `file`.
    ///
    /// `file` must be absolute. An existing file is only replaced with
    /// `force` or after confirmation. Returns the number of rows written.
    pub fn export(
        dashboard: &Dashboard,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = rows_from_dashboard(dashboard);
        if rows.is_empty() {
            warning("No events to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
            ExportFormat::Json => json::write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(rows.len())
    }
}
