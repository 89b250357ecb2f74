//! Quicksort with the first element as pivot.
//!
//! Average-case O(n log n), but sorted and reverse-sorted inputs produce
//! maximally unbalanced partitions every round and the comparison count
//! degrades to O(n^2). That cost profile is part of this variant's
//! contract; only its stack usage is bounded by the shared driver.

use std::cmp::Ordering;
use std::ops::Range;

use crate::partition::partition_first;
use crate::sort::{check_range, quicksort, SortError};

/// Sorts `v` ascending, in place. Unstable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` with a comparator function, in place. Unstable.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    quicksort(v, &mut is_less, &mut |v, is_less| partition_first(v, is_less));
}

/// Sorts `v[range]` ascending, leaving everything outside the range
/// untouched. Bounds are validated before anything is moved.
pub fn sort_range<T>(v: &mut [T], range: Range<usize>) -> Result<(), SortError>
where
    T: Ord,
{
    check_range(&range, v.len())?;
    sort(&mut v[range]);

    Ok(())
}
