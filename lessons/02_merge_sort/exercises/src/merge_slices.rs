use std::cmp::Ordering;

/// Which input wins when the two read cursors point at equal elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Take the element of the left slice first. The merge is stable.
    #[default]
    LeftFirst,
    /// Take the element of the right slice first. Equal elements swap sides.
    RightFirst,
}

impl TieBreak {
    fn takes_left(self, ordering: Ordering) -> bool {
        match ordering {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self == TieBreak::LeftFirst,
        }
    }
}

/// Merges two slices sorted in ascending order into a new sorted `Vec`.
///
/// Ties are taken from `left` first, so the result is stable.
/// If either input is not sorted, the output is some interleaving of both inputs, but it is not
/// guaranteed to be sorted.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, Ord::cmp)
}

/// Same as [`merge`], with the order given by `cmp`.
pub fn merge_by<T, F>(left: &[T], right: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_with_tie_break(left, right, TieBreak::LeftFirst, cmp)
}

/// Merges two sorted slices, resolving equal elements with `tie_break`.
pub fn merge_with_tie_break<T, F>(left: &[T], right: &[T], tie_break: TieBreak, cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_vecs(left.to_vec(), right.to_vec(), tie_break, cmp)
}

/// Merge on owned halves, used by the sorters so that every element is moved instead of cloned.
///
/// Both iterators act as read cursors. Once one of them runs dry, the rest of the other one is
/// appended as is, without any more comparisons.
pub(crate) fn merge_vecs<T, F>(left: Vec<T>, right: Vec<T>, tie_break: TieBreak, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if tie_break.takes_left(cmp(l, r)) {
            left.next()
        } else {
            right.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
