//! Prelude module for common imports.
//!
//! ```
//! use list_diff::prelude::*;
//!
//! let result = diff(&[1, 2, 3], &[1, 3]);
//! assert_eq!(result.stats(), DiffStats { common: 2, removed: 1, inserted: 0 });
//! ```

// Position sets
pub use crate::index_set::{IndexPath, IndexRun, IndexSet, Order};

// Vector operations
pub use crate::seq::IndexedVecExt;

// Diff
pub use crate::diff::{diff, diff_by, diff_by_key, DiffResult, DiffStats, ItemChanges};

// Nested diff
pub use crate::nested::{BatchUpdate, NestedDiff};

// Error
pub use crate::error::DiffError;
