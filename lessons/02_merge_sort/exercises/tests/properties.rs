use std::cmp::Ordering;
use std::collections::HashMap;

use merge_sort::{
    merge, merge_sort, merge_sort_by_key, merge_sort_in_place, merge_with_tie_break,
    par_merge_sort_by, ParallelConfig, TieBreak,
};
use proptest::{collection::vec, prelude::*};

fn counts(values: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    counts
}

fn is_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
    vec(-50..50i32, 0..40).prop_map(|mut v| {
        v.sort();
        v
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn output_is_a_permutation(input in vec(any::<i32>(), 0..200)) {
        let sorted = merge_sort(&input);
        prop_assert_eq!(sorted.len(), input.len());
        prop_assert_eq!(counts(&sorted), counts(&input));
    }

    #[test]
    fn output_is_ascending(input in vec(any::<i32>(), 0..200)) {
        prop_assert!(is_ascending(&merge_sort(&input)));
    }

    #[test]
    fn sorting_twice_changes_nothing(input in vec(-20..20i32, 0..200)) {
        let once = merge_sort(&input);
        prop_assert_eq!(merge_sort(&once), once);
    }

    #[test]
    fn merge_of_sorted_inputs(left in sorted_vec(), right in sorted_vec()) {
        let merged = merge(&left, &right);
        prop_assert!(is_ascending(&merged));

        let mut union = counts(&left);
        for (value, n) in counts(&right) {
            *union.entry(value).or_insert(0) += n;
        }
        prop_assert_eq!(counts(&merged), union);
    }

    #[test]
    fn equal_keys_keep_input_order(keys in vec(0..5u8, 0..100)) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().zip(0..).collect();
        let sorted = merge_sort_by_key(&tagged, |&(key, _)| key);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    #[test]
    fn variants_agree(input in vec(-100..100i32, 0..300)) {
        let expected = merge_sort(&input);

        let mut in_place = input.clone();
        merge_sort_in_place(&mut in_place);
        prop_assert_eq!(&in_place, &expected);

        let config = ParallelConfig { threshold: 16, max_depth: 2 };
        prop_assert_eq!(par_merge_sort_by(&input, &config, Ord::cmp), expected);
    }
}

fn by_key(a: &(i32, &str), b: &(i32, &str)) -> Ordering {
    a.0.cmp(&b.0)
}

#[test]
fn right_first_tie_break_is_not_stable() {
    let left = [(1, "left")];
    let right = [(1, "right")];
    let stable = merge_with_tie_break(&left, &right, TieBreak::LeftFirst, by_key);
    let inverted = merge_with_tie_break(&left, &right, TieBreak::RightFirst, by_key);

    assert_eq!(stable, vec![(1, "left"), (1, "right")]);
    assert_eq!(inverted, vec![(1, "right"), (1, "left")]);
}
