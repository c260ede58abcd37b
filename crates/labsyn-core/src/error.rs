//! Error types for curation of scanned listings.

use thiserror::Error;

/// Errors from editing a scanned listing.
///
/// The scan itself never fails; malformed names and ranges degrade to
/// "no candidate" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No record carries the requested `id`.
    #[error("no record with id {id}")]
    RecordNotFound { id: usize },
}

/// Result type for curation operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::RecordNotFound { id: 7 };
        assert_eq!(err.to_string(), "no record with id 7");
    }
}
