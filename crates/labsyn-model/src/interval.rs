use std::fmt;

/// A parsed reference range.
///
/// `min` and `max` are kept in the order they appeared in the source text;
/// no reordering is done. Either bound may be NaN when the text could not be
/// read as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The interval used for missing or non-text ranges.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// A single value expands to `(n, n)`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// True if either bound failed to parse.
    pub fn has_nan(&self) -> bool {
        self.min.is_nan() || self.max.is_nan()
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}
