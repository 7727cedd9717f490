//! Two-level diff for sectioned lists.
//!
//! Sections are diffed first. Every kept old section is then remapped to its
//! new section number with [`DiffResult::new_index_for_old_index`] and its
//! items are diffed against that section's items.
//!
//! [`NestedDiff::batch_updates`] yields the changes in the order list
//! widgets can apply them without invalidating positions:
//!
//! 1. item deletes, highest first, in old section numbers
//! 2. section deletes
//! 3. section inserts
//! 4. item inserts, lowest first, in new section numbers

use crate::diff::{DiffResult, diff_by};
use crate::error::DiffError;
use crate::index_set::{IndexPath, IndexSet, Order};

/// One step of applying a [`NestedDiff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchUpdate {
    /// Remove rows (old coordinates)
    DeleteItems(Vec<IndexPath>),
    /// Remove whole sections (old section numbers)
    DeleteSections(IndexSet),
    /// Add whole sections (new section numbers)
    InsertSections(IndexSet),
    /// Add rows (new coordinates)
    InsertItems(Vec<IndexPath>),
}

/// Section diff plus one item diff per kept old section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct NestedDiff {
    sections: DiffResult,
    items: Vec<Option<DiffResult>>,
}

impl NestedDiff {
    /// Assemble from precomputed parts.
    ///
    /// `items` has one entry per old section, `None` for removed ones.
    pub fn new(sections: DiffResult, items: Vec<Option<DiffResult>>) -> Result<Self, DiffError> {
        if items.len() != sections.old_len() {
            return Err(DiffError::SectionCountMismatch {
                expected: sections.old_len(),
                found: items.len(),
            });
        }
        if let Some(section) = items
            .iter()
            .enumerate()
            .find(|(section, diff)| diff.is_some() && sections.removed_indexes().contains(*section))
            .map(|(section, _)| section)
        {
            return Err(DiffError::RemovedSectionHasItems { section });
        }
        Ok(Self { sections, items })
    }

    /// Diff sectioned lists.
    ///
    /// `section_eq` decides whether two sections are the same section,
    /// `items_of` exposes a section's rows and `item_eq` compares rows.
    pub fn compute<S, T, FS, FI, FE>(
        old: &[S],
        new: &[S],
        section_eq: FS,
        items_of: FI,
        mut item_eq: FE,
    ) -> Self
    where
        FS: FnMut(&S, &S) -> bool,
        FI: Fn(&S) -> &[T],
        FE: FnMut(&T, &T) -> bool,
    {
        let sections = diff_by(old, new, section_eq);
        let items = (0..old.len())
            .map(|old_section| {
                let new_section = sections.new_index_for_old_index(old_section)?;
                Some(diff_by(
                    items_of(&old[old_section]),
                    items_of(&new[new_section]),
                    &mut item_eq,
                ))
            })
            .collect();
        Self { sections, items }
    }

    /// Like [`compute`](Self::compute), with item diffs spread over the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn par_compute<S, T, FS, FI, FE>(
        old: &[S],
        new: &[S],
        section_eq: FS,
        items_of: FI,
        item_eq: FE,
    ) -> Self
    where
        S: Sync,
        T: Sync,
        FS: FnMut(&S, &S) -> bool,
        FI: Fn(&S) -> &[T] + Sync,
        FE: Fn(&T, &T) -> bool + Sync,
    {
        use rayon::prelude::*;

        let sections = diff_by(old, new, section_eq);
        let items = (0..old.len())
            .into_par_iter()
            .map(|old_section| {
                let new_section = sections.new_index_for_old_index(old_section)?;
                Some(diff_by(
                    items_of(&old[old_section]),
                    items_of(&new[new_section]),
                    &item_eq,
                ))
            })
            .collect();
        Self { sections, items }
    }

    pub fn sections(&self) -> &DiffResult {
        &self.sections
    }

    /// Item diff for an old section, `None` if the section was removed.
    pub fn item_diff(&self, old_section: usize) -> Option<&DiffResult> {
        self.items.get(old_section).and_then(Option::as_ref)
    }

    /// True iff no section and no item changed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.items.iter().flatten().all(DiffResult::is_empty)
    }

    /// Changes in application order. Empty steps are omitted.
    pub fn batch_updates(&self) -> Vec<BatchUpdate> {
        let mut updates = Vec::new();

        let deletes: Vec<IndexPath> = self
            .kept_sections()
            .flat_map(|(old_section, _, diff)| {
                diff.removed_indexes().index_paths(old_section, Order::Descending)
            })
            .collect();
        if !deletes.is_empty() {
            updates.push(BatchUpdate::DeleteItems(deletes));
        }

        if !self.sections.removed_indexes().is_empty() {
            updates.push(BatchUpdate::DeleteSections(self.sections.removed_indexes().clone()));
        }
        if !self.sections.inserted_indexes().is_empty() {
            updates.push(BatchUpdate::InsertSections(self.sections.inserted_indexes().clone()));
        }

        let inserts: Vec<IndexPath> = self
            .kept_sections()
            .flat_map(|(_, new_section, diff)| {
                diff.inserted_indexes().index_paths(new_section, Order::Ascending)
            })
            .collect();
        if !inserts.is_empty() {
            updates.push(BatchUpdate::InsertItems(inserts));
        }

        updates
    }

    // (old section, new section, item diff) for every section carrying a diff
    fn kept_sections(&self) -> impl Iterator<Item = (usize, usize, &DiffResult)> + '_ {
        self.items.iter().enumerate().filter_map(|(old_section, diff)| {
            let diff = diff.as_ref()?;
            let new_section = self.sections.new_index_for_old_index(old_section)?;
            Some((old_section, new_section, diff))
        })
    }
}
