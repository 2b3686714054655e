use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::terminal::ask_yes_no;
use crate::utils::path::ensure_parent_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the work log table to `dest`, optionally zipped.
    ///
    /// Returns the path of the file actually written, or `None` when the
    /// user declined to overwrite an existing destination.
    pub fn backup(table: &Path, dest: &Path, compress: bool) -> AppResult<Option<PathBuf>> {
        if !table.exists() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Work log not found: {}", table.display()),
            )));
        }

        ensure_parent_dir(dest)?;

        if dest.exists() {
            warning(format!("The file '{}' already exists.", dest.display()));
            if !ask_yes_no("Do you want to overwrite it?")? {
                info("Backup cancelled by user.");
                return Ok(None);
            }
        }

        fs::copy(table, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if !compress {
            return Ok(Some(dest.to_path_buf()));
        }

        let compressed = compress_backup(dest)?;
        if let Err(e) = fs::remove_file(dest) {
            warning(format!("Failed to remove uncompressed backup: {e}"));
        }
        Ok(Some(compressed))
    }
}

/// Compress a backup into a `.zip` next to it.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "work_log.txt".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)?;
    let mut src = fs::File::open(path)?;
    io::copy(&mut src, &mut zip)?;
    zip.finish()?;

    success(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}
