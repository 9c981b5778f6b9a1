//! Fork-join flavour of the merge sort.
//!
//! Both halves of a large enough sub-slice are sorted at the same time: the left half on a scoped
//! thread, the right half on the current one. The two results are joined before they are merged,
//! so there is nothing to lock. Small sub-slices fall back to the sequential sorter.

use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::thread;

use crate::merge_slices::{merge_vecs, TieBreak};
use crate::sort::{merge_sort_by, split};

/// Sub-slices shorter than this are sorted sequentially by default.
pub const DEFAULT_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimal length of a sub-slice that is still split across two threads.
    pub threshold: usize,
    /// How many times the recursion may fork. Depth `d` uses at most `2^d` threads.
    pub max_depth: usize,
}

impl ParallelConfig {
    /// Enough fork levels to keep `threads` threads busy.
    pub fn for_threads(threads: usize) -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_depth: threads.max(1).next_power_of_two().trailing_zeros() as usize,
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        let threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::for_threads(threads)
    }
}

/// Returns a sorted copy of `seq`, using [`ParallelConfig::default`].
pub fn par_merge_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    par_merge_sort_by(seq, &ParallelConfig::default(), Ord::cmp)
}

/// Returns a copy of `seq` sorted with `cmp`.
///
/// The result is identical to [`merge_sort_by`], including the order of equal elements.
/// A panic inside `cmp` is propagated to the caller.
pub fn par_merge_sort_by<T, F>(seq: &[T], config: &ParallelConfig, cmp: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    fork_join(seq, config, 0, &cmp)
}

fn fork_join<T, F>(seq: &[T], config: &ParallelConfig, depth: usize, cmp: &F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if depth >= config.max_depth || seq.len() < config.threshold.max(2) {
        return merge_sort_by(seq, cmp);
    }
    let (left, right) = split(seq);
    log::trace!(
        "forking at depth {depth}: {} + {} elements",
        left.len(),
        right.len()
    );
    let (left, right) = thread::scope(|s| {
        let handle = s.spawn(|| fork_join(left, config, depth + 1, cmp));
        let right = fork_join(right, config, depth + 1, cmp);
        (handle.join(), right)
    });
    let left = match left {
        Ok(left) => left,
        Err(payload) => std::panic::resume_unwind(payload),
    };
    merge_vecs(left, right, TieBreak::LeftFirst, cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::merge_sort;

    fn eager() -> ParallelConfig {
        ParallelConfig {
            threshold: 2,
            max_depth: 3,
        }
    }

    #[test]
    fn depth_for_thread_counts() {
        assert_eq!(ParallelConfig::for_threads(0).max_depth, 0);
        assert_eq!(ParallelConfig::for_threads(1).max_depth, 0);
        assert_eq!(ParallelConfig::for_threads(2).max_depth, 1);
        assert_eq!(ParallelConfig::for_threads(3).max_depth, 2);
        assert_eq!(ParallelConfig::for_threads(8).max_depth, 3);
    }

    #[test]
    fn matches_sequential() {
        let input: Vec<i64> = (0..1000).map(|i| (i * 7919) % 1013 - 500).collect();
        let sorted = par_merge_sort_by(&input, &eager(), Ord::cmp);
        assert_eq!(sorted, merge_sort(&input));
    }

    #[test]
    fn base_cases() {
        assert_eq!(par_merge_sort_by(&[] as &[u8], &eager(), Ord::cmp), Vec::<u8>::new());
        assert_eq!(par_merge_sort_by(&[1u8], &eager(), Ord::cmp), vec![1]);
        assert_eq!(par_merge_sort(&[2, 1]), vec![1, 2]);
    }

    #[test]
    fn stable_across_threads() {
        let input: Vec<(u8, usize)> = (0..64).map(|i| ((i % 3) as u8, i)).collect();
        let sorted = par_merge_sort_by(&input, &eager(), |a, b| a.0.cmp(&b.0));
        for pair in sorted.windows(2) {
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    #[test]
    #[should_panic(expected = "comparator failed")]
    fn comparator_panic_is_propagated() {
        let input: Vec<u32> = (0..16).rev().collect();
        par_merge_sort_by(&input, &eager(), |a: &u32, b: &u32| {
            if *a == 0 || *b == 0 {
                panic!("comparator failed");
            }
            a.cmp(b)
        });
    }
}
