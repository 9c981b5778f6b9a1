//! Merge sort
//!
//! A classic divide-and-conquer sort. The input slice is never touched: the sorter splits it in
//! half, sorts both halves recursively and merges the two sorted results into a fresh `Vec`.
//!
//! ```
//! use merge_sort::merge_sort;
//!
//! let input = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
//! assert_eq!(merge_sort(&input), vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);
//! ```
//!
//! ## Stability
//! When the merge sees two equal elements, it always takes the one from the left half first.
//! Equal elements therefore keep the order in which they appeared in the input. The opposite
//! policy is still available through [`merge_with_tie_break`] with [`TieBreak::RightFirst`], so
//! that the difference can be observed.
//!
//! ## Variants
//! - [`merge_sort_by`] / [`merge_sort_by_key`] accept a custom ordering.
//! - [`merge_sort_in_place`] sorts a mutable slice bottom-up without allocating.
//! - [`par_merge_sort`] sorts large halves on scoped threads and joins them before merging.

pub mod in_place_mergesort;
pub mod merge_slices;
pub mod parallel;
pub mod sort;

pub use in_place_mergesort::{merge_sort_in_place, merge_sort_in_place_by};
pub use merge_slices::{merge, merge_by, merge_with_tie_break, TieBreak};
pub use parallel::{par_merge_sort, par_merge_sort_by, ParallelConfig};
pub use sort::{merge_sort, merge_sort_by, merge_sort_by_key, split};
