//! Bottom-up merge sort working directly on a mutable slice.
//!
//! Runs of width 1, 2, 4, ... are merged pairwise. Merging shifts an out-of-place element from the
//! right run to its final position with a rotation, so no buffer is needed, at the cost of
//! quadratic element moves in the worst case.

use std::cmp::Ordering;

pub fn merge_sort_in_place<T: Ord>(arr: &mut [T]) {
    merge_sort_in_place_by(arr, Ord::cmp);
}

pub fn merge_sort_in_place_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = n.min(start + width);
            let end = n.min(start + 2 * width);
            merge_runs(arr, start, mid, end, &mut cmp);
            start += 2 * width;
        }
        width *= 2;
    }
}

/// Merges the sorted runs `arr[start..mid]` and `arr[mid..end]`.
fn merge_runs<T, F>(arr: &mut [T], start: usize, mid: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = start;
    let mut j = mid;
    // `i` walks the left run, which shrinks towards `j` as right elements are pulled in front.
    while i < j && j < end {
        if cmp(&arr[i], &arr[j]) == Ordering::Greater {
            arr[i..=j].rotate_right(1);
            j += 1;
        }
        i += 1;
    }
}
