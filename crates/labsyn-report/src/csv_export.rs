//! CSV export of scanned lab listings.

use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use labsyn_model::{FieldValue, Record};
use tracing::info;

use crate::error::{ReportError, Result};

/// File name used when the caller does not pick one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "updated_lab_listing.csv";

/// Renders records as CSV text.
///
/// The header is the first record's column list and every row is written in
/// that column order. Commas are removed from text cells.
pub fn export_csv(records: &[Record]) -> Result<String> {
    let bytes = encode(records)?;
    // every cell came from a `String`
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes records to `path` as CSV.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let bytes = encode(records)?;
    std::fs::write(path, bytes).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = records.len(),
        "exported lab listing"
    );
    Ok(())
}

fn encode(records: &[Record]) -> Result<Vec<u8>> {
    let Some(first) = records.first() else {
        return Err(ReportError::NoData);
    };
    let columns: Vec<&str> = first.keys().collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer.write_record(&columns)?;
    for record in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| record.get(column).map(export_cell).unwrap_or_default()),
        )?;
    }
    writer
        .into_inner()
        .map_err(|err| ReportError::Csv(err.into_error().into()))
}

/// Formats one cell for export.
pub fn export_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.replace(',', ""),
        other => other.to_string(),
    }
}
