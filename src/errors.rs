//! Unified application error type.
//! All modules (store, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::record::ValidationError;
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
    // Storage
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "The header in {path} is not formatted properly (found '{found}').\n\
         Make sure the first line of {path} is '{expected}', then try again."
    )]
    Schema {
        path: String,
        found: String,
        expected: &'static str,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid regex syntax: {0}")]
    PatternSyntax(#[from] regex::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
