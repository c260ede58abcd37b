//! Well-known column names.

/// Display name of the lab test.
pub const LABS: &str = "labs";

/// Free-text reference range, e.g. `"10-20"` or `"< 5"`.
pub const LAB_RANGE: &str = "lab_range";

/// Upstream key column. Dropped by the scan; upstream keys are not trusted.
pub const IDENTIFIER: &str = "identifier";

/// Position of the record in the scanned input.
pub const ID: &str = "id";

pub const POSSIBLE_SYNONYMS: &str = "possible_synonyms";

pub const SYNONYMS: &str = "synonyms";

/// Separator used when joining candidate names into the `synonyms` column.
pub const SYNONYM_SEPARATOR: &str = " | ";
