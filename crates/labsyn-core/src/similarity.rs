//! Normalized name similarity for lab test names.
//!
//! The score is `1 - distance / longest`, where the distance comes from a
//! single-row dynamic-programming scan with unit costs for insertion,
//! deletion and substitution. Lengths and edits are counted in UTF-16 code
//! units, so a character outside the Basic Multilingual Plane weighs two.
//!
//! Names that only differ by `%` or `#` are treated as formatting variants
//! and score 0, which also means exact duplicates score 0.

/// Characters that are ignored when deciding whether two names are only
/// formatting variants of each other.
pub const COSMETIC_SYMBOLS: [char; 2] = ['%', '#'];

/// Similarity in `[0, 1]` between two test names.
///
/// Returns 0 when either name is missing or empty, or when the names are
/// equal once [`COSMETIC_SYMBOLS`] are removed (compared case-sensitively).
/// Otherwise the names are lower-cased and scored with
/// [`single_row_distance`].
pub fn name_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if is_cosmetic_variant(a, b) {
        return 0.0;
    }

    let a: Vec<u16> = a.to_lowercase().encode_utf16().collect();
    let b: Vec<u16> = b.to_lowercase().encode_utf16().collect();
    let longest = a.len().max(b.len());
    let distance = single_row_distance(&a, &b);

    (1.0 - distance as f64 / longest as f64).max(0.0)
}

/// True if `a` and `b` are identical after removing `%` and `#`.
pub fn is_cosmetic_variant(a: &str, b: &str) -> bool {
    let keep = |ch: &char| !COSMETIC_SYMBOLS.contains(ch);
    a.chars().filter(keep).eq(b.chars().filter(keep))
}

/// Edit distance from a single-row DP scan.
///
/// The row start (`costs[0]`) is written before column 1 reads its
/// diagonal, so a match in the first column costs one more than a textbook
/// Levenshtein cell would. Scores built on this distance rely on that: a
/// case-only variant such as `"Hemoglobin A1c"` / `"Hemoglobin A1C"` has
/// distance 1, not 0.
pub fn single_row_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let width = b.len();
    let mut costs: Vec<usize> = (0..=width).collect();

    for (i, ca) in a.iter().enumerate() {
        costs[0] = i + 1;
        let mut last = i;
        for j in 1..=width {
            let mut next = costs[j - 1];
            if *ca != b[j - 1] {
                next = next.min(last).min(costs[j]) + 1;
            }
            costs[j - 1] = last;
            last = next;
        }
        costs[width] = last;
    }

    costs[width]
}
