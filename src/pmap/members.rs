//! Like a HashMap of HashSets, but each value also remembers its node in
//! the bucket sequence.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use super::sequence::NodeId;

#[derive(Debug)]
struct Bucket<K, S> {
    node: NodeId,
    keys: IndexSet<K, S>,
}

/// Maps each live priority to the keys currently holding it.
#[derive(Debug)]
pub(crate) struct Members<K, V, S> {
    inner: HashMap<V, Bucket<K, S>, S>,
    hasher: S,
}

impl<K, V, S> Members<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: BuildHasher + Clone,
{
    pub(crate) fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher.clone()),
            hasher,
        }
    }

    /// Number of buckets.
    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn node(&self, value: &V) -> Option<NodeId> {
        self.inner.get(value).map(|b| b.node)
    }

    /// Adds `key` to the bucket for `value`. `node` is only used when the
    /// bucket is new; it must be the sequence node holding `value`.
    pub(crate) fn insert(&mut self, value: V, node: NodeId, key: K) {
        let hasher = &self.hasher;
        let bucket = self.inner.entry(value).or_insert_with(|| Bucket {
            node,
            keys: IndexSet::with_hasher(hasher.clone()),
        });
        debug_assert!(bucket.node == node, "bucket bound to another node");
        bucket.keys.insert(key);
    }

    /// Removes `key` from the bucket for `value`. When that empties the
    /// bucket it is dropped and its node is returned so the caller can
    /// unlink it. Silently ignores missing values.
    pub(crate) fn remove(&mut self, value: &V, key: &K) -> Option<NodeId> {
        let bucket = self.inner.get_mut(value)?;
        bucket.keys.swap_remove(key);
        if bucket.keys.is_empty() {
            self.inner.remove(value).map(|b| b.node)
        } else {
            None
        }
    }

    /// Any one key of the bucket for `value`. Stable until the bucket is
    /// next mutated.
    pub(crate) fn peek(&self, value: &V) -> Option<&K> {
        self.inner.get(value).and_then(|b| b.keys.get_index(0))
    }

    pub(crate) fn keys(&self, value: &V) -> impl Iterator<Item = &K> {
        self.inner.get(value).into_iter().flat_map(|b| b.keys.iter())
    }

    pub(crate) fn bucket_len(&self, value: &V) -> usize {
        self.inner.get(value).map_or(0, |b| b.keys.len())
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }
}
