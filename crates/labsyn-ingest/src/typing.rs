//! Dynamic typing of raw CSV cells.

use std::sync::LazyLock;

use labsyn_model::FieldValue;
use regex::Regex;

static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?([0-9]+\.?|\.[0-9]+|[0-9]+\.[0-9]+)([eE][-+]?[0-9]+)?\s*$").expect("valid float pattern")
});

/// Largest magnitude converted to a number; larger values stay text so
/// long numeric codes are not rounded.
const MAX_SAFE: f64 = 9_007_199_254_740_992.0;

/// Converts a raw cell into a typed value.
///
/// - empty -> [`FieldValue::Null`]
/// - `true`/`TRUE`/`false`/`FALSE` -> [`FieldValue::Bool`]
/// - a plain decimal or exponent literal -> [`FieldValue::Number`]
/// - anything else -> [`FieldValue::Text`], unmodified
pub fn type_cell(raw: &str) -> FieldValue {
    match raw {
        "" => return FieldValue::Null,
        "true" | "TRUE" => return FieldValue::Bool(true),
        "false" | "FALSE" => return FieldValue::Bool(false),
        _ => {}
    }
    if let Some(number) = parse_number(raw) {
        return FieldValue::Number(number);
    }
    FieldValue::Text(raw.to_string())
}

fn parse_number(raw: &str) -> Option<f64> {
    if !FLOAT.is_match(raw) {
        return None;
    }
    let number = raw.trim().parse::<f64>().ok()?;
    (number > -MAX_SAFE && number < MAX_SAFE).then_some(number)
}
