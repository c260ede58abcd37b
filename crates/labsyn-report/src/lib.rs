//! Export of scanned lab listings.

pub mod csv_export;
pub mod error;
pub mod json_export;

pub use csv_export::{DEFAULT_EXPORT_FILE_NAME, export_cell, export_csv, write_csv};
pub use error::{ReportError, Result};
pub use json_export::export_json;
