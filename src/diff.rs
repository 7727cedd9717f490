//! List diff and index translation.
//!
//! # Architecture
//!
//! ```text
//! diff_by(old, new, eq) -> DiffResult          // LCS, computed once
//!       |
//!       v
//! old_index_for_new_index / new_index_for_old_index   // pure reads
//! ```
//!
//! A [`DiffResult`] owns three [`IndexSet`]s:
//!
//! - `common`: positions in `old` that survive
//! - `removed`: positions in `old` that are dropped (complement of `common`)
//! - `inserted`: positions in `new` that are added
//!
//! Walking `old` without `removed` and `new` without `inserted` yields the
//! same sequence under the comparator.
//!
//! # Example
//!
//! ```
//! use list_diff::diff;
//!
//! let result = diff(&["A", "B", "C", "D"], &["B", "C", "E"]);
//! assert_eq!(result.removed_indexes().iter().collect::<Vec<_>>(), [0, 3]);
//! assert_eq!(result.inserted_indexes().iter().collect::<Vec<_>>(), [2]);
//! assert_eq!(result.new_index_for_old_index(1), Some(0));
//! assert_eq!(result.old_index_for_new_index(2), None);
//! ```

use crate::index_set::{IndexPath, IndexSet, Order};
use crate::lcs;

// =============================================================================
// Public Types
// =============================================================================

/// Cardinalities of a diff.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of items kept
    pub common: usize,
    /// Number of items removed from the old list
    pub removed: usize,
    /// Number of items inserted into the new list
    pub inserted: usize,
}

impl DiffStats {
    /// Total number of edit operations (not counting kept items)
    pub fn edit_count(&self) -> usize {
        self.removed + self.inserted
    }

    /// Check if there are no changes
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// Row changes for one section, ordered for safe application.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemChanges {
    /// Removed rows, highest first, addressed in the old section
    pub deletes: Vec<IndexPath>,
    /// Inserted rows, lowest first, addressed in the new section
    pub inserts: Vec<IndexPath>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.inserts.is_empty()
    }
}

/// Result of diffing two sequences.
///
/// Immutable once built, so it can be shared across threads freely.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[must_use]
pub struct DiffResult {
    common: IndexSet,
    removed: IndexSet,
    inserted: IndexSet,
}

impl DiffResult {
    /// Positions in the old sequence of the items that were kept.
    pub fn common_indexes(&self) -> &IndexSet {
        &self.common
    }

    /// Positions in the old sequence of the items that were removed.
    pub fn removed_indexes(&self) -> &IndexSet {
        &self.removed
    }

    /// Positions in the new sequence of the items that were inserted.
    pub fn inserted_indexes(&self) -> &IndexSet {
        &self.inserted
    }

    /// Split into `(common, removed, inserted)`.
    pub fn into_parts(self) -> (IndexSet, IndexSet, IndexSet) {
        (self.common, self.removed, self.inserted)
    }

    /// True iff nothing was removed or inserted.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty()
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats {
            common: self.common.len(),
            removed: self.removed.len(),
            inserted: self.inserted.len(),
        }
    }

    /// Length of the old sequence.
    pub fn old_len(&self) -> usize {
        self.common.len() + self.removed.len()
    }

    /// Length of the new sequence.
    pub fn new_len(&self) -> usize {
        self.common.len() + self.inserted.len()
    }

    /// Position in the old sequence of the item now at `new_index`.
    ///
    /// Returns `None` if the item was inserted. Positions are not checked
    /// against [`new_len`](Self::new_len); past the end they extrapolate.
    pub fn old_index_for_new_index(&self, new_index: usize) -> Option<usize> {
        if self.inserted.contains(new_index) {
            return None;
        }
        let rank = new_index - self.inserted.count_in_range(0..new_index);
        Some(skip_members(&self.removed, rank))
    }

    /// Position in the new sequence of the item that was at `old_index`.
    ///
    /// Returns `None` if the item was removed. Positions are not checked
    /// against [`old_len`](Self::old_len); past the end they extrapolate.
    pub fn new_index_for_old_index(&self, old_index: usize) -> Option<usize> {
        if self.removed.contains(old_index) {
            return None;
        }
        let removed_before = self.removed.count_in_range(0..old_index);
        let rank = old_index - removed_before;
        let result = skip_members(&self.inserted, rank);
        log::trace!(
            "old -> new: removed {} inserted {}: {} - {} + {} = {}",
            self.removed,
            self.inserted,
            old_index,
            removed_before,
            result - rank,
            result
        );
        Some(result)
    }

    /// Row changes for applying this diff inside one section.
    pub fn item_changes(&self, section: usize) -> ItemChanges {
        self.item_changes_between(section, section)
    }

    /// Row changes when the section moved from `old_section` to `new_section`.
    ///
    /// Deletes are addressed in the old section, inserts in the new one.
    pub fn item_changes_between(&self, old_section: usize, new_section: usize) -> ItemChanges {
        ItemChanges {
            deletes: self.removed.index_paths(old_section, Order::Descending),
            inserts: self.inserted.index_paths(new_section, Order::Ascending),
        }
    }
}

/// Maps the `rank`-th non-member to its position.
///
/// Every run starting at or before the running position shifts it past the
/// whole run. Each shift can bring the next run into reach, so this is a
/// sequential scan rather than a single count.
fn skip_members(set: &IndexSet, rank: usize) -> usize {
    let mut position = rank;
    for run in set.ranges(Order::Ascending) {
        if run.start > position {
            break;
        }
        position += run.len;
    }
    position
}

// =============================================================================
// Main API
// =============================================================================

/// Diff two sequences using `==`.
pub fn diff<T: PartialEq>(old: &[T], new: &[T]) -> DiffResult {
    diff_by(old, new, |a, b| a == b)
}

/// Diff two sequences, treating items with equal keys as the same item.
pub fn diff_by_key<T, K, F>(old: &[T], new: &[T], mut key: F) -> DiffResult
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    diff_by(old, new, |a, b| key(a) == key(b))
}

/// Diff two sequences with a caller-supplied equality predicate.
///
/// The predicate is expected to behave like an equivalence relation. If it
/// does not, the result is still well formed but may not be minimal.
pub fn diff_by<T, U, F>(old: &[T], new: &[U], mut eq: F) -> DiffResult
where
    F: FnMut(&T, &U) -> bool,
{
    let common = lcs::common_indexes(old, new, &mut eq);
    let removed = common.complement(old.len());
    let inserted = inserted_indexes(old, &common, new, &mut eq);

    log::debug!(
        "diff: old={} new={} common={} removed={} inserted={}",
        old.len(),
        new.len(),
        common.len(),
        removed.len(),
        inserted.len()
    );

    DiffResult {
        common,
        removed,
        inserted,
    }
}

/// Positions of `new` not covered by the kept items, matched greedily.
fn inserted_indexes<T, U, F>(old: &[T], common: &IndexSet, new: &[U], eq: &mut F) -> IndexSet
where
    F: FnMut(&T, &U) -> bool,
{
    let mut kept = common.iter().map(|i| &old[i]).peekable();
    new.iter()
        .enumerate()
        .filter_map(|(j, item)| match kept.peek() {
            Some(&head) if eq(head, item) => {
                kept.next();
                None
            }
            _ => Some(j),
        })
        .collect()
}
