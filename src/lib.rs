//! Testbed comparing two quicksort pivot-selection strategies, plus a
//! fixed-bucket chained hash table.
//!
//! The two sort variants share one partition scheme and differ only in how
//! the pivot is chosen, see [`partition`]. The hash table never resizes,
//! collisions are handled by per-bucket chains, see [`chained`].

pub mod chained;
pub mod partition;
pub mod sort;
