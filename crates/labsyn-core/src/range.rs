//! Reference range parsing and comparison.
//!
//! Ranges are free text (`"10-20"`, `"< 5"`, `"4.5 - 6.2 %"`). Everything
//! except ASCII digits, `-`, `.` and `,` is thrown away and the remainder is
//! split on `-`. The parse never fails: tokens that are not numbers become
//! NaN, and NaN bounds never compare as similar.

use labsyn_model::{FieldValue, Interval};

/// Absolute tolerance, in source units, below which two bounds are "the same".
pub const DEFAULT_RANGE_TOLERANCE: f64 = 5.0;

/// Parses a range cell. Missing and non-text cells give `(0, 0)`.
pub fn parse_range(value: Option<&FieldValue>) -> Interval {
    match value.and_then(FieldValue::as_text) {
        Some(text) => parse_range_text(text),
        None => Interval::zero(),
    }
}

/// Parses range text into `(min, max)`.
///
/// A single number yields `(n, n)`. With more than one `-` only the first
/// two tokens are used. An empty token reads as `0`, so `"-5"` is `(0, 5)`
/// and text with no digits at all is `(0, 0)`.
pub fn parse_range_text(text: &str) -> Interval {
    let cleaned: String = text
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.' | ','))
        .collect();
    let mut tokens = cleaned.trim().split('-').map(parse_token);
    // split always yields at least one token
    let min = tokens.next().unwrap_or(0.0);
    match tokens.next() {
        Some(max) => Interval::new(min, max),
        None => Interval::point(min),
    }
}

fn parse_token(token: &str) -> f64 {
    if token.is_empty() {
        return 0.0;
    }
    token.parse::<f64>().unwrap_or(f64::NAN)
}

/// True when both bounds differ by less than `tolerance`.
///
/// Any NaN bound makes this false, including when comparing an interval
/// with itself.
pub fn intervals_within(a: Interval, b: Interval, tolerance: f64) -> bool {
    (a.min - b.min).abs() < tolerance && (a.max - b.max).abs() < tolerance
}

/// Parses both cells and compares them with [`DEFAULT_RANGE_TOLERANCE`].
pub fn ranges_similar(a: Option<&FieldValue>, b: Option<&FieldValue>) -> bool {
    intervals_within(parse_range(a), parse_range(b), DEFAULT_RANGE_TOLERANCE)
}
