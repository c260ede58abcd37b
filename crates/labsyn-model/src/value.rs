use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ModelError;

/// A single cell of a lab listing.
///
/// Cells are typed dynamically when a file is loaded: numeric text becomes a
/// [`FieldValue::Number`], `true`/`false` become [`FieldValue::Bool`] and
/// empty cells become [`FieldValue::Null`]. Everything else stays text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Returns the text content, or `None` for non-text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Number(value) => f.write_str(&format_number(*value)),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Null => Ok(()),
        }
    }
}

/// Formats a number the way a spreadsheet user expects to see it back:
/// shortest round-trip digits, no trailing `.0`, and exponent notation
/// outside `[1e-6, 1e21)` (`1e-7`, `1.5e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Whether a record has at least one synonym candidate.
///
/// Rendered as the literal strings `TRUE` / `FALSE` in the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynonymFlag {
    True,
    False,
}

impl SynonymFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynonymFlag::True => "TRUE",
            SynonymFlag::False => "FALSE",
        }
    }

    pub fn from_found(found: bool) -> Self {
        if found {
            SynonymFlag::True
        } else {
            SynonymFlag::False
        }
    }

    /// Reads the flag back out of a cell.
    ///
    /// Accepts the text form and the boolean form a re-loaded export produces.
    pub fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => text.parse().ok(),
            FieldValue::Bool(found) => Some(Self::from_found(*found)),
            _ => None,
        }
    }
}

impl fmt::Display for SynonymFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SynonymFlag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRUE" => Ok(SynonymFlag::True),
            "FALSE" => Ok(SynonymFlag::False),
            other => Err(ModelError::InvalidSynonymFlag(other.to_string())),
        }
    }
}

impl From<SynonymFlag> for FieldValue {
    fn from(flag: SynonymFlag) -> Self {
        FieldValue::Text(flag.as_str().to_string())
    }
}
