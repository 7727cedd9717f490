//! list-diff - LCS-based list diff with index translation
//!
//! ## Core Concepts
//!
//! **Kept, removed, inserted**: a diff of two sequences is three sorted
//! position sets. Walking the old sequence without the removed positions and
//! the new sequence without the inserted positions gives the same items, and
//! that shared subsequence is a longest one.
//!
//! **Index translation**: once computed, a [`DiffResult`] maps positions
//! between the two coordinate spaces without recomputing anything, so a list
//! widget can keep the identity and state of rows that did not change.
//!
//! ## Modules
//! - `index_set`: run-list position set (`IndexSet`)
//! - `seq`: select/remove/insert on vectors addressed by an `IndexSet`
//! - `diff`: the diff itself and index translation
//! - `nested`: two-level diff for sectioned lists
//! - `error`: error types
//!
//! ## Usage
//!
//! ```
//! use list_diff::{diff, IndexedVecExt};
//!
//! let old = vec!["A", "B", "C", "D"];
//! let new = vec!["B", "C", "E"];
//! let result = diff(&old, &new);
//!
//! // Replay the diff on a copy of the old list
//! let mut rows = old.clone();
//! rows.remove_at(result.removed_indexes());
//! rows.insert_at(new.select(result.inserted_indexes()), result.inserted_indexes());
//! assert_eq!(rows, new);
//! ```

/// Sorted position sets stored as runs
pub mod index_set;

/// Vector operations driven by position sets
pub mod seq;

/// List diff and index translation
pub mod diff;

/// Sectioned (two-level) diff
pub mod nested;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

mod lcs;

// =============================================================================
// Re-exports
// =============================================================================

pub use index_set::{IndexPath, IndexRun, IndexSet, Order, Ranges};

pub use seq::IndexedVecExt;

pub use diff::{diff, diff_by, diff_by_key, DiffResult, DiffStats, ItemChanges};

pub use nested::{BatchUpdate, NestedDiff};

pub use error::DiffError;

// =============================================================================
// Tests
// =============================================================================
