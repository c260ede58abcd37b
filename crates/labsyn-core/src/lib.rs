//! Synonym detection for lab listings.
//!
//! The scan compares every pair of records in a listing and flags pairs
//! whose test names are nearly identical while their reference ranges are
//! not, which usually means the same test reported under a different name
//! or format.
//!
//! # Example
//!
//! ```
//! use labsyn_core::{SynonymScanner, ScanOptions};
//! use labsyn_model::{FieldValue, Record, fields};
//!
//! let records: Vec<Record> = [("Hemoglobin A1c", "4-6"), ("Hemoglobin A1C", "40-60")]
//!     .into_iter()
//!     .map(|(name, range)| {
//!         [
//!             (fields::LABS, FieldValue::from(name)),
//!             (fields::LAB_RANGE, FieldValue::from(range)),
//!         ]
//!         .into_iter()
//!         .collect()
//!     })
//!     .collect();
//!
//! let scanned = SynonymScanner::new(ScanOptions::default()).scan(records);
//! assert_eq!(scanned[0].text(fields::SYNONYMS), Some("Hemoglobin A1C"));
//! ```

pub mod error;
pub mod range;
pub mod scan;
pub mod similarity;
pub mod table;

pub use error::{CoreError, Result};
pub use range::{
    DEFAULT_RANGE_TOLERANCE, intervals_within, parse_range, parse_range_text, ranges_similar,
};
pub use scan::{DEFAULT_MIN_SIMILARITY, ScanOptions, SynonymScanner, scan_records};
pub use similarity::{is_cosmetic_variant, name_similarity, single_row_distance};
pub use table::{ScannedTable, split_synonyms};
