//! Data model for lab listing synonym detection.
//!
//! A lab listing is a loosely-typed table: each row is a [`Record`] mapping
//! column names to [`FieldValue`]s in column order. Only two columns carry
//! meaning for the synonym scan ([`fields::LABS`] and [`fields::LAB_RANGE`]);
//! everything else is carried through untouched.

pub mod error;
pub mod fields;
pub mod interval;
pub mod record;
pub mod value;

pub use error::{ModelError, Result};
pub use interval::Interval;
pub use record::Record;
pub use value::{FieldValue, SynonymFlag};
