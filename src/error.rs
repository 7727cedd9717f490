//! Error types for list-diff.
//!
//! Computing a diff never fails. These errors come from consuming one:
//! applying index sets to vectors and assembling nested diffs by hand.

use thiserror::Error;

/// Errors that can occur when applying or assembling diffs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Number of elements to insert differs from the index set's cardinality
    #[error("insert count mismatch: index set holds {expected} positions, got {found} elements")]
    InsertCountMismatch {
        /// Cardinality of the index set
        expected: usize,
        /// Number of elements supplied
        found: usize,
    },

    /// An index set addresses a position past the end of the sequence
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// Offending position
        index: usize,
        /// Sequence length at the time of the operation
        len: usize,
    },

    /// Item diffs do not line up with the old sections
    #[error("item diffs cover {found} sections, expected {expected}")]
    SectionCountMismatch {
        /// Number of sections in the old list
        expected: usize,
        /// Number of item diff entries supplied
        found: usize,
    },

    /// A removed section was given an item diff
    #[error("section {section} was removed but carries an item diff")]
    RemovedSectionHasItems {
        /// Old section number
        section: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::InsertCountMismatch { expected: 3, found: 2 };
        assert_eq!(
            err.to_string(),
            "insert count mismatch: index set holds 3 positions, got 2 elements"
        );

        let err = DiffError::IndexOutOfBounds { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 out of bounds for sequence of length 4");

        let err = DiffError::RemovedSectionHasItems { section: 1 };
        assert_eq!(err.to_string(), "section 1 was removed but carries an item diff");
    }

    #[test]
    fn test_error_is_send_sync() {
        static_assertions::assert_impl_all!(DiffError: Send, Sync, std::error::Error);
    }
}
