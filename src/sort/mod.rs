//! Quicksort drivers for the two pivot-selection policies.
//!
//! [`randomized`] and [`deterministic`] share the driver below and differ
//! only in which partition routine they hand it.

pub mod deterministic;
pub mod randomized;

use std::ops::Range;

/// Errors surfaced by the range-bounded sort entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The requested bounds do not describe a sub-slice of the input.
    #[error("invalid sort range {start}..{end} for slice of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<(), SortError> {
    if range.start > range.end || range.end > len {
        return Err(SortError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }

    Ok(())
}

// Shared divide-and-conquer driver. Recurses only into the smaller side of
// each partition and loops on the larger one, so stack depth stays within
// O(log n) even when every pivot choice is maximally unbalanced.
pub(crate) fn quicksort<T, F, P>(mut v: &mut [T], is_less: &mut F, partition: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: FnMut(&mut [T], &mut F) -> usize,
{
    while v.len() >= 2 {
        let mid = partition(v, is_less);

        // `mid` is the pivot's final position, already sorted.
        let (left, rest) = v.split_at_mut(mid);
        let right = &mut rest[1..];

        if left.len() <= right.len() {
            quicksort(left, is_less, partition);
            v = right;
        } else {
            quicksort(right, is_less, partition);
            v = left;
        }
    }
}
