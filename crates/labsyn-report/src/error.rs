use std::path::PathBuf;
use thiserror::Error;

/// Errors from exporting a lab listing.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Nothing has been loaded and scanned yet.
    #[error("no data to export")]
    NoData,

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
