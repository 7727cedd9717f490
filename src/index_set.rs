//! Sparse ordered set of `usize` positions.
//!
//! [`IndexSet`] stores its members as a sorted list of maximal contiguous
//! runs. Diffs of UI lists are dominated by a few blocks of inserted or
//! removed rows, so the run list stays short even for long lists.
//!
//! # Complexity
//!
//! | Operation        | Cost                                   |
//! |------------------|----------------------------------------|
//! | `contains`       | O(log r)                               |
//! | `count_in_range` | O(log r + k), k = runs touching range  |
//! | `insert_range`   | O(log r + r) worst case (shifting)     |
//! | `remove_range`   | O(log r + r) worst case (shifting)     |
//! | `ranges`         | O(1) + O(r)                            |
//! | `len`            | O(1)                                   |
//!
//! where `r` is the number of runs.
//!
//! # Example
//!
//! ```
//! use list_diff::{IndexRun, IndexSet, Order};
//!
//! let set: IndexSet = [2, 3, 4, 9].into_iter().collect();
//! assert_eq!(set.count_in_range(0..5), 3);
//!
//! let runs: Vec<_> = set.ranges(Order::Ascending).collect();
//! assert_eq!(runs, [IndexRun::new(2, 3), IndexRun::new(9, 1)]);
//! ```

use std::fmt;
use std::iter::FlatMap;
use std::ops::Range;
use std::slice;

use smallvec::SmallVec;

// =============================================================================
// IndexRun
// =============================================================================

/// A contiguous block of positions `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRun {
    /// First position in the run
    pub start: usize,
    /// Number of positions in the run
    pub len: usize,
}

impl IndexRun {
    /// Create a run starting at `start` covering `len` positions.
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last position.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end()
    }

    /// The run as a half-open range.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

// =============================================================================
// Order / IndexPath
// =============================================================================

/// Direction in which runs or positions are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Lowest position first. Safe for insertions.
    #[default]
    Ascending,
    /// Highest position first. Safe for removals.
    Descending,
}

/// Two-component position: a section and an item inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

// =============================================================================
// IndexSet
// =============================================================================

/// Ascending iterator over the members of an [`IndexSet`].
pub type Iter<'a> = FlatMap<slice::Iter<'a, IndexRun>, Range<usize>, fn(&IndexRun) -> Range<usize>>;

/// Sorted set of positions stored as maximal contiguous runs.
///
/// Runs are kept disjoint and non-adjacent after every mutation, so two sets
/// with the same members always have the same representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSet {
    runs: SmallVec<[IndexRun; 4]>,
    len: usize,
}

impl IndexSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding every position in `range`.
    pub fn from_range(range: Range<usize>) -> Self {
        let mut set = Self::new();
        set.insert_range(range);
        set
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of maximal runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Smallest member.
    pub fn first(&self) -> Option<usize> {
        self.runs.first().map(|run| run.start)
    }

    /// Largest member.
    pub fn last(&self) -> Option<usize> {
        self.runs.last().map(|run| run.end() - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        let pos = self.runs.partition_point(|run| run.end() <= index);
        self.runs.get(pos).is_some_and(|run| run.contains(index))
    }

    /// Number of members inside `range`.
    ///
    /// Binary search finds the first run ending after `range.start`, then only
    /// runs overlapping the range are visited.
    pub fn count_in_range(&self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return 0;
        }
        let first = self.runs.partition_point(|run| run.end() <= range.start);
        self.runs[first..]
            .iter()
            .take_while(|run| run.start < range.end)
            .map(|run| run.end().min(range.end) - run.start.max(range.start))
            .sum()
    }

    /// Maximal runs in the requested order.
    pub fn ranges(&self, order: Order) -> Ranges<'_> {
        Ranges {
            inner: self.runs.iter(),
            order,
        }
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        self.runs
            .iter()
            .flat_map(IndexRun::as_range as fn(&IndexRun) -> Range<usize>)
    }

    /// Add `index`. Returns `false` if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        self.insert_range(index..index + 1);
        true
    }

    /// Remove `index`. Returns `false` if it was absent.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.remove_range(index..index + 1);
        true
    }

    /// Add every position in `range`, merging with touching runs.
    pub fn insert_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        // Runs in lo..hi overlap or are adjacent to the range
        let lo = self.runs.partition_point(|run| run.end() < range.start);
        let hi = self.runs.partition_point(|run| run.start <= range.end);

        let mut start = range.start;
        let mut end = range.end;
        let mut absorbed = 0;
        if lo < hi {
            start = start.min(self.runs[lo].start);
            end = end.max(self.runs[hi - 1].end());
            absorbed = self.runs[lo..hi].iter().map(|run| run.len).sum();
        }

        self.runs.drain(lo..hi);
        self.runs.insert(lo, IndexRun::new(start, end - start));
        self.len = self.len - absorbed + (end - start);
    }

    /// Remove every position in `range`, splitting runs as needed.
    pub fn remove_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        // Runs in lo..hi overlap the range
        let lo = self.runs.partition_point(|run| run.end() <= range.start);
        let hi = self.runs.partition_point(|run| run.start < range.end);
        if lo >= hi {
            return;
        }

        let removed = self.count_in_range(range.clone());
        let head = self.runs[lo];
        let tail = self.runs[hi - 1];

        let mut kept: SmallVec<[IndexRun; 2]> = SmallVec::new();
        if head.start < range.start {
            kept.push(IndexRun::new(head.start, range.start - head.start));
        }
        if tail.end() > range.end {
            kept.push(IndexRun::new(range.end, tail.end() - range.end));
        }

        self.runs.drain(lo..hi);
        self.runs.insert_many(lo, kept);
        self.len -= removed;
    }

    /// Positions in `0..bound` that are not members.
    pub fn complement(&self, bound: usize) -> IndexSet {
        let mut gaps = IndexSet::new();
        let mut cursor = 0;
        for run in self.runs.iter().take_while(|run| run.start < bound) {
            if run.start > cursor {
                gaps.push_run(IndexRun::new(cursor, run.start - cursor));
            }
            cursor = run.end();
        }
        if cursor < bound {
            gaps.push_run(IndexRun::new(cursor, bound - cursor));
        }
        gaps
    }

    /// Members paired with `section`, visited in `order`.
    ///
    /// List widgets prefer deletions highest-first and insertions lowest-first.
    pub fn index_paths(&self, section: usize, order: Order) -> Vec<IndexPath> {
        let mut paths = Vec::with_capacity(self.len);
        match order {
            Order::Ascending => paths.extend(self.iter().map(|item| IndexPath::new(section, item))),
            Order::Descending => {
                paths.extend(self.iter().rev().map(|item| IndexPath::new(section, item)))
            }
        }
        paths
    }

    // Appends a run known to start past the current last member.
    fn push_run(&mut self, run: IndexRun) {
        debug_assert!(self.runs.last().is_none_or(|last| last.end() < run.start));
        self.len += run.len;
        self.runs.push(run);
    }
}

impl From<Range<usize>> for IndexSet {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for IndexSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            // Ascending input (the common case) only ever touches the tail
            match self.runs.last().map(IndexRun::end) {
                Some(end) if end == index => {
                    if let Some(last) = self.runs.last_mut() {
                        last.len += 1;
                    }
                    self.len += 1;
                }
                Some(end) if end > index => {
                    self.insert(index);
                }
                _ => self.push_run(IndexRun::new(index, 1)),
            }
        }
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if run.len == 1 {
                write!(f, "{}", run.start)?;
            } else {
                write!(f, "{}-{}", run.start, run.end() - 1)?;
            }
        }
        f.write_str("}")
    }
}

// =============================================================================
// Ranges
// =============================================================================

/// Iterator over the maximal runs of an [`IndexSet`].
#[derive(Debug, Clone)]
pub struct Ranges<'a> {
    inner: slice::Iter<'a, IndexRun>,
    order: Order,
}

impl Iterator for Ranges<'_> {
    type Item = IndexRun;

    fn next(&mut self) -> Option<IndexRun> {
        match self.order {
            Order::Ascending => self.inner.next().copied(),
            Order::Descending => self.inner.next_back().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Ranges<'_> {}
