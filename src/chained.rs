//! Fixed-bucket hash table with per-bucket chaining.

use std::hash::{Hash, Hasher};
use std::mem;

use fxhash::FxHasher;

/// Hash table mapping keys to values across a fixed number of buckets.
///
/// Collisions are resolved by chaining: each bucket owns an ordered list of
/// key-value pairs and a key appears at most once per table. The bucket
/// count is fixed at construction and the table never resizes, so chains
/// grow without bound as load increases and lookup degrades to the chain
/// length.
#[derive(Debug, Clone)]
pub struct ChainedTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K, V> ChainedTable<K, V>
where
    K: Hash + Eq,
{
    /// Creates a table with `buckets` chains.
    ///
    /// Panics if `buckets` is zero.
    pub fn new(buckets: usize) -> Self {
        assert!(buckets > 0, "a chained table needs at least one bucket");

        Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Maps a key or overwrites its value in place, returning the previous
    /// value if there was one. Never creates a second chain entry for an
    /// existing key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_of(&key);
        let chain = &mut self.buckets[bucket];

        for (existing, slot) in chain.iter_mut() {
            if *existing == key {
                return Some(mem::replace(slot, value));
            }
        }

        chain.push((key, value));
        self.len += 1;

        None
    }

    /// Looks up the value stored for `key`. Absent keys yield `None`,
    /// never a sentinel value.
    pub fn search(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Unmaps `key` and returns its value. Deleting an absent key is a
    /// no-op, not an error.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];

        let pos = chain.iter().position(|(existing, _)| existing == key)?;
        self.len -= 1;

        Some(chain.remove(pos).1)
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed since construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Stored pairs per bucket. Unbounded, nothing ever rebalances it.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Enumerates every bucket's chain in bucket order. Diagnostic surface
    /// for demo and test consumers, the chain layout carries no contract
    /// beyond "each key sits in exactly one chain".
    pub fn buckets(&self) -> impl Iterator<Item = &[(K, V)]> {
        self.buckets.iter().map(|chain| chain.as_slice())
    }

    /// Iterates over all stored pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(key, value)| (key, value)))
    }

    // Same key, same bucket, for the lifetime of the table. FxHasher keeps
    // no per-instance state, its output depends on the key bytes alone.
    fn bucket_of(&self, key: &K) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);

        hasher.finish() as usize % self.buckets.len()
    }
}
