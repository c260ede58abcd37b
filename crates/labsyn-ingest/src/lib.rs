//! Lab listing ingestion.
//!
//! Loads a CSV export of lab test definitions into [`labsyn_model::Record`]s,
//! typing each cell dynamically (numbers, booleans, empty cells) the way a
//! spreadsheet import would.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use labsyn_ingest::read_records;
//!
//! let records = read_records(Path::new("lab_listing.csv"))?;
//! ```

mod error;
mod reader;
mod typing;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_records, read_records_from_reader};

// === Cell Typing ===
pub use typing::type_cell;
