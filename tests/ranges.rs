//! Range-bounded entry points: sort exactly the requested sub-slice,
//! reject invalid bounds before touching anything.

use algo_comp::sort::{deterministic, randomized, SortError};

#[test]
fn sub_range_leaves_outside_untouched() {
    let mut v = vec![9, 8, 5, 3, 8, 1, 7, 0];
    randomized::sort_range(&mut v, 2..6).unwrap();
    assert_eq!(v, [9, 8, 1, 3, 5, 8, 7, 0]);

    let mut v = vec![9, 8, 5, 3, 8, 1, 7, 0];
    deterministic::sort_range(&mut v, 2..6).unwrap();
    assert_eq!(v, [9, 8, 1, 3, 5, 8, 7, 0]);
}

#[test]
fn full_range_sorts_everything() {
    let mut v = vec![5, 3, 8, 1, 9, 2];
    randomized::sort_range(&mut v, 0..6).unwrap();
    assert_eq!(v, [1, 2, 3, 5, 8, 9]);

    let mut v = vec![5, 3, 8, 1, 9, 2];
    deterministic::sort_range(&mut v, 0..6).unwrap();
    assert_eq!(v, [1, 2, 3, 5, 8, 9]);
}

#[test]
fn empty_range_is_a_noop() {
    let mut v = vec![3, 1, 2];
    randomized::sort_range(&mut v, 1..1).unwrap();
    deterministic::sort_range(&mut v, 3..3).unwrap();
    assert_eq!(v, [3, 1, 2]);
}

#[test]
fn inverted_bounds_are_rejected() {
    let mut v = vec![3, 1, 2];
    let err = deterministic::sort_range(&mut v, 2..1).unwrap_err();

    assert_eq!(
        err,
        SortError::InvalidRange {
            start: 2,
            end: 1,
            len: 3
        }
    );
    // Rejected up front, nothing moved.
    assert_eq!(v, [3, 1, 2]);
}

#[test]
fn out_of_bounds_end_is_rejected() {
    let mut v = vec![3, 1, 2];
    let err = randomized::sort_range(&mut v, 0..4).unwrap_err();

    assert_eq!(
        err,
        SortError::InvalidRange {
            start: 0,
            end: 4,
            len: 3
        }
    );
    assert_eq!(v, [3, 1, 2]);
}

#[test]
fn range_error_displays_bounds() {
    let err = SortError::InvalidRange {
        start: 4,
        end: 2,
        len: 3,
    };

    assert_eq!(
        err.to_string(),
        "invalid sort range 4..2 for slice of length 3"
    );
}
