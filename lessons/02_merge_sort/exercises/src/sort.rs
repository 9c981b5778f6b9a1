use std::cmp::Ordering;

use crate::merge_slices::{merge_vecs, TieBreak};

/// Splits `seq` at `seq.len() / 2`.
///
/// For odd lengths the right half is the longer one, and a single element ends up on the right.
pub fn split<T>(seq: &[T]) -> (&[T], &[T]) {
    seq.split_at(seq.len() / 2)
}

/// Returns a sorted copy of `seq`, leaving `seq` untouched.
///
/// The sort is stable and runs in `O(n log n)` comparisons.
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    merge_sort_by(seq, Ord::cmp)
}

/// Returns a copy of `seq` sorted with the comparator `cmp`.
pub fn merge_sort_by<T, F>(seq: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(seq, &mut cmp)
}

/// Returns a copy of `seq` sorted by the key extracted with `key`.
///
/// The key is recomputed on every comparison.
pub fn merge_sort_by_key<T, K, F>(seq: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(seq, |a, b| key(a).cmp(&key(b)))
}

fn sort_recursive<T, F>(seq: &[T], cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (left, right) = split(seq);
    let left = sort_recursive(left, cmp);
    let right = sort_recursive(right, cmp);
    merge_vecs(left, right, TieBreak::LeftFirst, cmp)
}
