//! Queue shuffling
//!
//! Fisher-Yates permutation over a working copy of the queue. Every call
//! draws an independent permutation, so re-shuffling an already shuffled
//! queue produces a new order.

use rand::Rng;

/// Return a uniformly random permutation of `items`
///
/// The input is left unmodified. Sequences of length 0 or 1 come back
/// unchanged.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out);
    out
}

/// Fisher-Yates shuffle, in place
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index at or below it. Unbiased over all n! orderings,
/// O(n) time.
pub(crate) fn shuffle_in_place<T>(items: &mut [T]) {
    let mut rng = rand::thread_rng();
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_and_singleton_unchanged() {
        let empty: Vec<u32> = vec![];
        assert_eq!(shuffled(&empty), empty);

        let one = vec![42];
        assert_eq!(shuffled(&one), one);
    }

    #[test]
    fn output_is_a_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let out = shuffled(&items);

        assert_eq!(out.len(), items.len());

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for v in &out {
            *counts.entry(*v).or_default() += 1;
        }
        for v in &items {
            assert_eq!(counts.get(v), Some(&1));
        }
    }

    #[test]
    fn input_left_unmodified() {
        let items: Vec<u32> = (0..20).collect();
        let before = items.clone();
        let _ = shuffled(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn duplicate_items_preserved_as_multiset() {
        let items = vec!["a", "a", "b"];
        let mut out = shuffled(&items);
        out.sort_unstable();
        assert_eq!(out, vec!["a", "a", "b"]);
    }

    #[test]
    fn long_input_usually_reordered() {
        // 30 elements: the identity permutation has probability 1/30!,
        // so a repeat of the input order means the shuffle is broken.
        let items: Vec<u32> = (0..30).collect();
        let out = shuffled(&items);
        assert_ne!(out, items);
    }
}
