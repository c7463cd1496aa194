// src/export/logic.rs

use crate::core::calendar::CalendarRow;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High level calendar export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `file` in `format`; returns the resolved output path.
    /// The path must be absolute (after `~/` expansion).
    pub fn export_calendar(
        rows: &[CalendarRow],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if rows.is_empty() {
            warning("No calendar rows to export.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => write_csv(&path, rows)?,
            ExportFormat::Json => write_json(&path, rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(Some(path))
    }
}
