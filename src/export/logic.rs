// src/export/logic.rs

use crate::core::filter::{by_date_range, sorted_chronological};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::models::Row;
use crate::store::{Store, Table};
use crate::ui::messages::warning;
use crate::utils::path::ensure_parent_dir;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Records to export: valid rows only, optionally limited to an
    /// inclusive date range, in chronological order.
    pub fn collect<T: Table>(
        store: &Store<T>,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<RecordExport>> {
        let rows = sorted_chronological(store.load_all()?);
        let rows = match range {
            Some((from, to)) => by_date_range(&rows, from, to),
            None => rows,
        };

        Ok(rows
            .iter()
            .filter_map(Row::record)
            .map(RecordExport::from)
            .collect())
    }

    /// Write the selected records to `file`. Returns how many were written.
    pub fn export<T: Table>(
        store: &Store<T>,
        format: ExportFormat,
        file: &Path,
        range: Option<(NaiveDate, NaiveDate)>,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let records = Self::collect(store, range)?;
        if records.is_empty() {
            warning("No records found for the selected range.");
            return Ok(0);
        }

        ensure_parent_dir(file)?;
        match format {
            ExportFormat::Csv => export_csv(&records, file)?,
            ExportFormat::Json => export_json(&records, file)?,
        }

        Ok(records.len())
    }
}
