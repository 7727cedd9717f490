//! Longest Common Subsequence (LCS) table and backtrack.
//!
//! # Algorithm
//!
//! `L[i][j]` holds the LCS length of `old[i..]` and `new[j..]`, filled from
//! the bottom-right corner. The walk that recovers the kept positions then
//! moves forward from `(0, 0)`:
//!
//! - equal heads are matched and both cursors advance
//! - otherwise the old cursor advances when `L[i + 1][j] >= L[i][j + 1]`,
//!   else the new cursor advances
//!
//! The `>=` fixes which alignment is reported when several have the same
//! length. Consumers rely on it, so it must not change.
//!
//! # Complexity
//!
//! - Time: O(m * n) comparisons
//! - Space: O(m * n) for the table, released before returning
//!
//! A shared leading run is matched without entering the table. The forward
//! walk would match those heads first anyway, so the result is identical.

use crate::index_set::IndexSet;

/// Suffix LCS lengths stored row-major in one buffer.
pub(crate) struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the `(old.len() + 1) x (new.len() + 1)` table.
    pub(crate) fn build<T, U, F>(old: &[T], new: &[U], eq: &mut F) -> Self
    where
        F: FnMut(&T, &U) -> bool,
    {
        let width = new.len() + 1;
        // Last row and last column stay zero
        let mut cells = vec![0usize; (old.len() + 1) * width];

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                cells[i * width + j] = if eq(&old[i], &new[j]) {
                    1 + cells[(i + 1) * width + j + 1]
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { width, cells }
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    /// LCS length of the full inputs.
    pub(crate) fn lcs_len(&self) -> usize {
        self.at(0, 0)
    }
}

/// Positions of `old` that belong to the reported common subsequence.
pub(crate) fn common_indexes<T, U, F>(old: &[T], new: &[U], eq: &mut F) -> IndexSet
where
    F: FnMut(&T, &U) -> bool,
{
    let prefix = old
        .iter()
        .zip(new)
        .take_while(|&(a, b)| eq(a, b))
        .count();

    let mut common = IndexSet::from_range(0..prefix);
    let old_rest = &old[prefix..];
    let new_rest = &new[prefix..];
    if old_rest.is_empty() || new_rest.is_empty() {
        return common;
    }

    let table = LcsTable::build(old_rest, new_rest, eq);
    let (mut i, mut j) = (0, 0);
    while i < old_rest.len() && j < new_rest.len() {
        if eq(&old_rest[i], &new_rest[j]) {
            common.insert(prefix + i);
            i += 1;
            j += 1;
        } else if table.at(i + 1, j) >= table.at(i, j + 1) {
            i += 1;
        } else {
            j += 1;
        }
    }

    debug_assert_eq!(common.len(), prefix + table.lcs_len());
    common
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcs_len(old: &str, new: &str) -> usize {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        LcsTable::build(&old, &new, &mut |a: &char, b: &char| a == b).lcs_len()
    }

    fn common(old: &str, new: &str) -> Vec<usize> {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        common_indexes(&old, &new, &mut |a: &char, b: &char| a == b)
            .iter()
            .collect()
    }

    #[test]
    fn test_table_lengths() {
        assert_eq!(lcs_len("", ""), 0);
        assert_eq!(lcs_len("abc", ""), 0);
        assert_eq!(lcs_len("ABCBDAB", "BDCABA"), 4);
        assert_eq!(lcs_len("abcd", "bce"), 2);
        assert_eq!(lcs_len("same", "same"), 4);
    }

    #[test]
    fn test_table_suffix_entries() {
        let old = ['a', 'b'];
        let new = ['b', 'a'];
        let table = LcsTable::build(&old, &new, &mut |a: &char, b: &char| a == b);
        assert_eq!(table.at(0, 0), 1);
        assert_eq!(table.at(1, 0), 1);
        assert_eq!(table.at(0, 1), 1);
        assert_eq!(table.at(2, 0), 0);
        assert_eq!(table.at(0, 2), 0);
    }

    #[test]
    fn test_common_basic() {
        assert_eq!(common("ABCD", "BCE"), vec![1, 2]);
        assert_eq!(common("", "XY"), Vec::<usize>::new());
        assert_eq!(common("XY", ""), Vec::<usize>::new());
        assert_eq!(common("XYZ", "XYZ"), vec![0, 1, 2]);
    }

    #[test]
    fn test_tie_break_advances_old_cursor() {
        // "ab" vs "ba": both single-element alignments are optimal.
        // Skipping old 'a' first keeps old 'b'.
        assert_eq!(common("ab", "ba"), vec![1]);
        // Same shape after a shared prefix
        assert_eq!(common("xab", "xba"), vec![0, 2]);
    }

    #[test]
    fn test_prefix_trim_matches_full_walk() {
        assert_eq!(common("aab", "ab"), vec![0, 2]);
        assert_eq!(common("abcabc", "abc"), vec![0, 1, 2]);
    }
}
