//! Property-based tests for diff invariants and index translation.

use list_diff::{diff, diff_by, IndexSet, IndexedVecExt, Order};
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// Small alphabet so that sequences share plenty of items
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..5, 0..24)
}

fn without(items: &[u8], skip: &IndexSet) -> Vec<u8> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip.contains(*i))
        .map(|(_, item)| *item)
        .collect()
}

/// Reference LCS length, independent of the table in the crate
fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    for x in a {
        let mut row = vec![0usize; b.len() + 1];
        for (j, y) in b.iter().enumerate() {
            row[j + 1] = if x == y { prev[j] + 1 } else { prev[j + 1].max(row[j]) };
        }
        prev = row;
    }
    prev[b.len()]
}

// =============================================================================
// Diff invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// common and removed partition 0..old.len()
    #[test]
    fn common_and_removed_partition_old(old in sequence(), new in sequence()) {
        let result = diff(&old, &new);
        let common = result.common_indexes();
        let removed = result.removed_indexes();
        prop_assert_eq!(common.len() + removed.len(), old.len());
        for i in 0..old.len() {
            prop_assert!(common.contains(i) != removed.contains(i));
        }
        prop_assert!(removed.last().is_none_or(|last| last < old.len()));
    }

    /// inserted stays inside 0..new.len() and cardinalities agree
    #[test]
    fn inserted_within_new(old in sequence(), new in sequence()) {
        let result = diff(&old, &new);
        prop_assert!(result.inserted_indexes().last().is_none_or(|last| last < new.len()));
        prop_assert_eq!(result.common_indexes().len(), new.len() - result.inserted_indexes().len());
        prop_assert_eq!(result.old_len(), old.len());
        prop_assert_eq!(result.new_len(), new.len());
    }

    /// Both filtered sequences are equal and as long as the LCS
    #[test]
    fn filtered_sequences_match(old in sequence(), new in sequence()) {
        let result = diff(&old, &new);
        let kept_old = without(&old, result.removed_indexes());
        let kept_new = without(&new, result.inserted_indexes());
        prop_assert_eq!(&kept_old, &kept_new);
        prop_assert_eq!(kept_old.len(), lcs_len(&old, &new));
        prop_assert_eq!(kept_old, old.select(result.common_indexes()));
    }

    /// Diffing a sequence against itself changes nothing
    #[test]
    fn self_diff_is_empty(old in sequence()) {
        let result = diff(&old, &old);
        prop_assert!(result.is_empty());
        prop_assert!(result.removed_indexes().is_empty());
        prop_assert!(result.inserted_indexes().is_empty());
    }

    /// Empty old inserts everything, empty new removes everything
    #[test]
    fn empty_side_degenerates(items in sequence()) {
        let inserted = diff(&[], &items);
        prop_assert_eq!(inserted.inserted_indexes(), &IndexSet::from_range(0..items.len()));
        prop_assert!(inserted.common_indexes().is_empty());

        let removed = diff(&items, &[]);
        prop_assert_eq!(removed.removed_indexes(), &IndexSet::from_range(0..items.len()));
        prop_assert!(removed.inserted_indexes().is_empty());
    }

    /// Translating back and forth returns the starting position
    #[test]
    fn translation_round_trips(old in sequence(), new in sequence()) {
        let result = diff(&old, &new);
        for i in 0..old.len() {
            if let Some(j) = result.new_index_for_old_index(i) {
                prop_assert!(j < new.len());
                prop_assert_eq!(old[i], new[j]);
                prop_assert_eq!(result.old_index_for_new_index(j), Some(i));
            } else {
                prop_assert!(result.removed_indexes().contains(i));
            }
        }
        for j in 0..new.len() {
            if let Some(i) = result.old_index_for_new_index(j) {
                prop_assert_eq!(result.new_index_for_old_index(i), Some(j));
            } else {
                prop_assert!(result.inserted_indexes().contains(j));
            }
        }
    }

    /// Removing then inserting by index set rebuilds the new list
    #[test]
    fn replay_rebuilds_new(old in sequence(), new in sequence()) {
        let result = diff(&old, &new);
        let mut rows = old.clone();
        rows.remove_at(result.removed_indexes());
        rows.insert_at(new.select(result.inserted_indexes()), result.inserted_indexes());
        prop_assert_eq!(rows, new);
    }

    /// A key comparator only sees keys
    #[test]
    fn comparator_drives_matching(old in sequence(), new in sequence()) {
        let by_parity = diff_by(&old, &new, |a, b| a % 2 == b % 2);
        let parity = |items: &[u8]| items.iter().map(|x| x % 2).collect::<Vec<_>>();
        prop_assert_eq!(by_parity, diff(&parity(&old), &parity(&new)));
    }
}

// =============================================================================
// IndexSet properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// count_in_range and ranges agree with a plain sorted vector
    #[test]
    fn index_set_matches_model(
        members in prop::collection::btree_set(0usize..64, 0..40),
        start in 0usize..70,
        len in 0usize..70,
    ) {
        let set: IndexSet = members.iter().copied().collect();
        prop_assert_eq!(set.len(), members.len());
        prop_assert!(set.iter().eq(members.iter().copied()));

        let end = start + len;
        let expected = members.range(start..end).count();
        prop_assert_eq!(set.count_in_range(start..end), expected);

        // Runs are maximal and cover every member once
        let runs: Vec<_> = set.ranges(Order::Ascending).collect();
        for pair in runs.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start);
        }
        prop_assert_eq!(runs.iter().map(|run| run.len).sum::<usize>(), members.len());

        let mut descending: Vec<_> = set.ranges(Order::Descending).collect();
        descending.reverse();
        prop_assert_eq!(descending, runs);
    }

    /// insert/remove keep the set equal to a freshly collected one
    #[test]
    fn index_set_mutation_matches_model(
        ops in prop::collection::vec((any::<bool>(), 0usize..32, 1usize..6), 0..40),
    ) {
        let mut set = IndexSet::new();
        let mut model = std::collections::BTreeSet::new();
        for (add, start, len) in ops {
            if add {
                set.insert_range(start..start + len);
                model.extend(start..start + len);
            } else {
                set.remove_range(start..start + len);
                for i in start..start + len {
                    model.remove(&i);
                }
            }
        }
        let rebuilt: IndexSet = model.iter().copied().collect();
        prop_assert_eq!(set, rebuilt);
    }
}
