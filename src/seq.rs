//! Index-set driven bulk operations on vectors.
//!
//! Removal walks runs highest-first and insertion walks runs lowest-first, so
//! positions that have not been visited yet never shift under the operation.
//!
//! ```
//! use list_diff::{IndexSet, IndexedVecExt};
//!
//! let mut items = vec!['a', 'b', 'c', 'd'];
//! let gone: IndexSet = [0, 3].into_iter().collect();
//! items.remove_at(&gone);
//! assert_eq!(items, ['b', 'c']);
//!
//! let added: IndexSet = [2].into_iter().collect();
//! items.insert_at(vec!['e'], &added);
//! assert_eq!(items, ['b', 'c', 'e']);
//! ```

use crate::error::DiffError;
use crate::index_set::{IndexSet, Order};

/// Bulk select/remove/insert addressed by an [`IndexSet`].
pub trait IndexedVecExt<T> {
    /// Clone the elements at `indexes`, in ascending position order.
    ///
    /// # Panics
    ///
    /// Panics if any member of `indexes` is out of bounds.
    fn select(&self, indexes: &IndexSet) -> Vec<T>
    where
        T: Clone;

    /// Remove the elements at `indexes`.
    ///
    /// # Panics
    ///
    /// Panics if any member of `indexes` is out of bounds.
    fn remove_at(&mut self, indexes: &IndexSet);

    /// Insert `elements` so that they end up at `indexes`.
    ///
    /// Elements are consumed in order, one run at a time.
    ///
    /// # Panics
    ///
    /// Panics if `elements.len() != indexes.len()` or if a run starts past the
    /// end of the vector at the time it is inserted.
    fn insert_at(&mut self, elements: Vec<T>, indexes: &IndexSet);

    /// Like [`remove_at`](Self::remove_at), but reports out-of-bounds
    /// positions instead of panicking. The vector is left untouched on error.
    fn try_remove_at(&mut self, indexes: &IndexSet) -> Result<(), DiffError>;

    /// Like [`insert_at`](Self::insert_at), but reports a count mismatch or
    /// an unreachable position instead of panicking. The vector is left
    /// untouched on error.
    fn try_insert_at(&mut self, elements: Vec<T>, indexes: &IndexSet) -> Result<(), DiffError>;
}

impl<T> IndexedVecExt<T> for Vec<T> {
    fn select(&self, indexes: &IndexSet) -> Vec<T>
    where
        T: Clone,
    {
        let mut selected = Vec::with_capacity(indexes.len());
        for run in indexes.ranges(Order::Ascending) {
            selected.extend_from_slice(&self[run.as_range()]);
        }
        selected
    }

    fn remove_at(&mut self, indexes: &IndexSet) {
        for run in indexes.ranges(Order::Descending) {
            self.drain(run.as_range());
        }
    }

    fn insert_at(&mut self, elements: Vec<T>, indexes: &IndexSet) {
        assert_eq!(
            indexes.len(),
            elements.len(),
            "insert_at: index set cardinality must equal the number of new elements"
        );
        let mut incoming = elements.into_iter();
        for run in indexes.ranges(Order::Ascending) {
            let at = run.start;
            self.splice(at..at, incoming.by_ref().take(run.len));
        }
    }

    fn try_remove_at(&mut self, indexes: &IndexSet) -> Result<(), DiffError> {
        if let Some(last) = indexes.last() {
            if last >= self.len() {
                return Err(DiffError::IndexOutOfBounds { index: last, len: self.len() });
            }
        }
        self.remove_at(indexes);
        Ok(())
    }

    fn try_insert_at(&mut self, elements: Vec<T>, indexes: &IndexSet) -> Result<(), DiffError> {
        if elements.len() != indexes.len() {
            return Err(DiffError::InsertCountMismatch {
                expected: indexes.len(),
                found: elements.len(),
            });
        }
        // Each run must start at or before the end of the vector as it
        // stands after the earlier runs went in
        let mut len = self.len();
        for run in indexes.ranges(Order::Ascending) {
            if run.start > len {
                return Err(DiffError::IndexOutOfBounds { index: run.start, len });
            }
            len += run.len;
        }
        self.insert_at(elements, indexes);
        Ok(())
    }
}
