use crate::core::analytics::AttendanceData;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::VisitExport;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::month_key::MonthKey;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Flatten the attendance data into rows, optionally for one month.
    pub fn rows(
        data: &AttendanceData,
        user: &str,
        gym: &str,
        month: Option<MonthKey>,
    ) -> Vec<VisitExport> {
        data.all_days()
            .filter(|(k, _)| month.is_none_or(|m| m == **k))
            .map(|(k, d)| VisitExport::new(user, gym, k, d))
            .collect()
    }

    /// Write the rows to `path`. Returns the number of rows written.
    pub fn export(
        rows: &[VisitExport],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if rows.is_empty() {
            warning("No visits found for the selected period.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => csv::write_csv(path, rows)?,
            ExportFormat::Json => json::write_json(path, rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(rows.len())
    }
}
