//! CSV reading into records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use labsyn_model::Record;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::typing::type_cell;

/// Reads a lab listing from a CSV file.
///
/// The first row names the columns. Blank lines are skipped and every cell
/// goes through [`type_cell`]. Rows shorter than the header leave trailing
/// columns absent; cells beyond the header are dropped.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let records = parse_records(file, path)?;
    info!(
        path = %path.display(),
        rows = records.len(),
        "loaded lab listing"
    );
    Ok(records)
}

/// Reads a lab listing from any reader, e.g. an in-memory buffer.
pub fn read_records_from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    parse_records(reader, Path::new("<input>"))
}

fn parse_records<R: Read>(reader: R, path: &Path) -> Result<Vec<Record>> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .enumerate()
        .map(|(idx, header)| normalize_header(idx, header))
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    debug!(columns = headers.len(), "read header row");

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = result.map_err(csv_error)?;
        if row.len() > headers.len() {
            warn!(
                row = row_idx + 1,
                expected = headers.len(),
                found = row.len(),
                "dropping cells beyond the header"
            );
        }
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.as_str(), type_cell(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

fn normalize_header(idx: usize, raw: &str) -> String {
    if idx == 0 {
        raw.trim_start_matches('\u{feff}').to_string()
    } else {
        raw.to_string()
    }
}
