// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", records.len(), path);
    Ok(())
}

/// Export a standard CSV (double-quote quoting, header from serde).
///
/// This is an interchange file, not a work log table: it is never read back.
pub(crate) fn export_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in records {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", records.len(), path);
    Ok(())
}
