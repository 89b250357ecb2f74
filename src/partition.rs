//! Pivot selection and in-place partitioning, shared by both sort variants.

use rand::Rng;

/// Partitions `v` around its first element.
///
/// Elements strictly less than the pivot end up in front of it, everything
/// else behind it. Returns the pivot's final index, so that afterwards
/// `v[..i] < v[i]` and `v[i + 1..] >= v[i]`.
///
/// Panics if `v` is empty.
pub fn partition_first<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(!v.is_empty(), "cannot partition an empty slice");

    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let lt_count = lomuto_scan(rest, pivot, is_less);

    // Place the pivot between the two partitions.
    v.swap(0, lt_count);

    lt_count
}

/// Partitions `v` around a uniformly random element drawn from `rng`.
///
/// The pivot is swapped to the back before scanning. Elements less than or
/// equal to the pivot end up in front of it, everything else behind it.
/// Returns the pivot's final index, so that afterwards `v[..i] <= v[i]` and
/// `v[i + 1..] > v[i]`.
///
/// Note the grouping asymmetry with [`partition_first`]: this variant keeps
/// pivot-equal elements on the left, the deterministic one on the right.
///
/// Panics if `v` is empty.
pub fn partition_random<T, F, R>(v: &mut [T], rng: &mut R, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    assert!(!v.is_empty(), "cannot partition an empty slice");

    let len = v.len();
    let pivot_pos = rng.gen_range(0..len);
    v.swap(pivot_pos, len - 1);

    let (rest, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    // `elem <= pivot` expressed through `is_less` alone.
    let le_count = lomuto_scan(rest, pivot, &mut |a, b| !is_less(b, a));

    // Place the pivot between the two partitions.
    v.swap(le_count, len - 1);

    le_count
}

// Lomuto scan: moves every element for which `in_left` holds against `pivot`
// to the front of `v` and returns how many there are. `pivot` lives outside
// `v`, split off by the caller.
fn lomuto_scan<T, F>(v: &mut [T], pivot: &T, in_left: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut store = 0;
    for scan in 0..v.len() {
        if in_left(&v[scan], pivot) {
            v.swap(store, scan);
            store += 1;
        }
    }

    store
}
