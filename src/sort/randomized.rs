//! Quicksort with a uniformly random pivot per partition call.
//!
//! The random pivot decorrelates partition balance from the input order,
//! giving expected O(n log n) comparisons on every input distribution.

use std::cmp::Ordering;
use std::ops::Range;

use rand::Rng;

use crate::partition::partition_random;
use crate::sort::{check_range, quicksort, SortError};

/// Sorts `v` ascending, in place. Unstable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_rng(v, &mut rand::thread_rng());
}

/// Sorts `v` with a comparator function, in place. Unstable.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_rng(v, compare, &mut rand::thread_rng());
}

/// Like [`sort`], but drawing pivot positions from the caller-supplied
/// `rng`. Pass a seeded rng for reproducible pivot sequences.
pub fn sort_with_rng<T, R>(v: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng,
{
    sort_by_with_rng(v, |a, b| a.cmp(b), rng);
}

/// Like [`sort_by`], but drawing pivot positions from the caller-supplied
/// `rng`.
pub fn sort_by_with_rng<T, F, R>(v: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    quicksort(v, &mut is_less, &mut |v, is_less| {
        partition_random(v, rng, is_less)
    });
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
