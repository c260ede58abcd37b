//! JSON export of scanned lab listings.

use labsyn_model::Record;

use crate::error::Result;

/// Renders records as a pretty-printed JSON array of objects, one per row,
/// keys in column order.
///
/// Unlike [`crate::export_csv`], an empty listing renders as `[]`, and text
/// keeps its commas.
pub fn export_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
