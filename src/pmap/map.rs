use std::collections::{hash_map::RandomState, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use log::{debug, trace};

use super::{
    compare::{Compare, Greater},
    error::{Error, Result},
    handle::Handle,
    members::Members,
    sequence::{NodeId, Sequence},
};

/// Associates keys with priorities and keeps the best priority at hand.
///
/// Keys sharing a priority live in one bucket. Buckets are kept in a linked
/// sequence sorted by the comparator `C`, front first, so [`top`] is O(1).
/// When a key moves, the new bucket is searched for starting at the old one,
/// which makes unit steps (see [`Handle::increment`]) amortized O(1). A jump
/// across `D` distinct live priorities costs O(D).
///
/// With the default [`Greater`] comparator the largest priority is on top;
/// use [`Less`](super::Less) for smallest first.
///
/// Not synchronized. Share it behind a lock and hold the lock across a whole
/// read-modify-write such as `at(k).increment()`.
///
/// [`top`]: PriorityMap::top
#[derive(Debug)]
pub struct PriorityMap<K, V, C = Greater, S = RandomState> {
    cmp: C,

    /// distinct live priorities, best first
    seq: Sequence<V>,

    /// key -> node holding its priority
    keys: HashMap<K, NodeId, S>,

    /// priority -> keys holding it
    members: Members<K, V, S>,

    /// nodes stepped over by the last bucket search
    #[cfg(test)]
    probes: usize,
}

impl<K, V> PriorityMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default + Ord,
{
    /// A max-first map.
    pub fn new() -> Self {
        Self::with_comparator(Greater)
    }
}

impl<K, V, C> PriorityMap<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V>,
{
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_hasher(cmp, RandomState::new())
    }

    /// Reserves room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self
    where
        C: Default,
    {
        let mut map = Self::with_comparator(C::default());
        map.keys.reserve(capacity);
        map
    }
}

impl<K, V, C, S> PriorityMap<K, V, C, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V>,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(hasher: S) -> Self
    where
        C: Default,
    {
        Self::with_comparator_and_hasher(C::default(), hasher)
    }

    pub fn with_comparator_and_hasher(cmp: C, hasher: S) -> Self {
        Self {
            cmp,
            seq: Sequence::new(),
            keys: HashMap::with_hasher(hasher.clone()),
            members: Members::with_hasher(hasher),
            #[cfg(test)]
            probes: 0,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// 1 if `key` is present, 0 otherwise.
    pub fn count(&self, key: &K) -> usize {
        self.keys.contains_key(key) as usize
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of distinct priorities currently held.
    pub fn distinct_values(&self) -> usize {
        self.seq.len()
    }

    /// The priority of `key`, without inserting it.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.keys.get(key).map(|&node| self.seq.value(node))
    }

    /// A key holding the best priority, and that priority.
    ///
    /// Among tied keys the one reported is unspecified, but it does not
    /// change until the map is mutated. [`pop`](Self::pop) removes the same
    /// key.
    pub fn top(&self) -> Result<(&K, &V)> {
        let front = self.seq.front().ok_or(Error::Empty)?;
        let value = self.seq.value(front);
        let key = self
            .members
            .peek(value)
            .ok_or(Error::Inconsistent("front bucket has no keys"))?;
        Ok((key, value))
    }

    /// Removes the key reported by [`top`](Self::top) and returns it with
    /// its priority.
    pub fn pop(&mut self) -> Result<(K, V)> {
        let front = self.seq.front().ok_or(Error::Empty)?;
        let value = self.seq.value(front).clone();
        let key = self
            .members
            .peek(&value)
            .cloned()
            .ok_or(Error::Inconsistent("front bucket has no keys"))?;
        self.keys.remove(&key);
        self.detach(&value, &key);
        Ok((key, value))
    }

    /// Removes `key`. Returns the number of keys removed (0 or 1).
    pub fn erase(&mut self, key: &K) -> usize {
        match self.keys.remove(key) {
            Some(node) => {
                let value = self.seq.value(node).clone();
                self.detach(&value, key);
                1
            }
            None => 0,
        }
    }

    /// Sets the priority of `key`, inserting it if absent.
    ///
    /// A new key starts out at `V::default()` and is moved from there.
    pub fn set(&mut self, key: K, value: V) {
        match self.keys.get(&key).copied() {
            Some(old_node) => {
                let old = self.seq.value(old_node).clone();
                if old == value {
                    return;
                }
                let node = self.place(&value, Some(old_node));
                self.detach(&old, &key);
                self.attach(key, value, node);
            }
            None => {
                let anchor = self.members.node(&V::default());
                let node = self.place(&value, anchor);
                self.attach(key, value, node);
            }
        }
    }

    /// A handle to the priority of `key`.
    ///
    /// NOTE: an absent key is inserted at `V::default()` right here, even if
    /// the handle is only read. Use [`get`](Self::get) or
    /// [`contains_key`](Self::contains_key) to test for presence.
    pub fn at(&mut self, key: K) -> Handle<'_, K, V, C, S> {
        if !self.keys.contains_key(&key) {
            self.set(key.clone(), V::default());
        }
        Handle::new(self, key)
    }

    /// Number of keys holding exactly `value`.
    pub fn bucket_len(&self, value: &V) -> usize {
        self.members.bucket_len(value)
    }

    /// Keys currently holding exactly `value`.
    pub fn keys_at<'a>(&'a self, value: &V) -> impl Iterator<Item = &'a K> + 'a {
        let value = self.members.node(value).map(|node| self.seq.value(node));
        value.into_iter().flat_map(move |v| self.members.keys(v))
    }

    /// All entries, bucket by bucket from best to worst priority.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.seq
            .iter()
            .flat_map(move |(_, v)| self.members.keys(v).map(move |k| (k, v)))
    }

    pub fn clear(&mut self) {
        debug!(
            "clear: {} keys in {} buckets",
            self.keys.len(),
            self.members.len()
        );
        self.keys.clear();
        self.members.clear();
        self.seq.clear();
    }

    //
    // Bucket maintenance
    //

    /// Returns the node holding `value`, creating and splicing it in if no
    /// key holds `value` yet. The search for the slot starts at `from`.
    fn place(&mut self, value: &V, from: Option<NodeId>) -> NodeId {
        #[cfg(test)]
        {
            self.probes = 0;
        }
        if let Some(node) = self.members.node(value) {
            return node;
        }
        let node = match from {
            Some(from) if self.cmp.precedes(value, self.seq.value(from)) => {
                self.splice_frontward(from, value)
            }
            Some(from) => self.splice_backward(from, value),
            None => self.splice_from_ends(value),
        };
        trace!("open bucket - {} buckets", self.seq.len());
        node
    }

    /// `value` belongs somewhere in front of `from`.
    fn splice_frontward(&mut self, from: NodeId, value: &V) -> NodeId {
        let mut probes = 0;
        let mut cur = self.seq.prev(from);
        while let Some(id) = cur {
            if !self.cmp.precedes(value, self.seq.value(id)) {
                break;
            }
            probes += 1;
            cur = self.seq.prev(id);
        }
        trace!("scan front: {} probes", probes);
        #[cfg(test)]
        {
            self.probes = probes;
        }
        self.seq.insert_after(cur, value.clone())
    }

    /// `value` belongs somewhere behind `from`.
    fn splice_backward(&mut self, from: NodeId, value: &V) -> NodeId {
        let mut probes = 0;
        let mut cur = self.seq.next(from);
        while let Some(id) = cur {
            if !self.cmp.precedes(self.seq.value(id), value) {
                break;
            }
            probes += 1;
            cur = self.seq.next(id);
        }
        trace!("scan back: {} probes", probes);
        #[cfg(test)]
        {
            self.probes = probes;
        }
        self.seq.insert_before(cur, value.clone())
    }

    /// No anchor to start from. Values past either end are placed directly,
    /// anything else is searched for from the back.
    fn splice_from_ends(&mut self, value: &V) -> NodeId {
        match (self.seq.front(), self.seq.back()) {
            (Some(front), Some(back)) => {
                if self.cmp.precedes(value, self.seq.value(front)) {
                    self.seq.insert_after(None, value.clone())
                } else if self.cmp.precedes(self.seq.value(back), value) {
                    self.seq.insert_before(None, value.clone())
                } else {
                    self.splice_frontward(back, value)
                }
            }
            _ => self.seq.insert_after(None, value.clone()),
        }
    }

    fn attach(&mut self, key: K, value: V, node: NodeId) {
        debug_assert!(self.seq.value(node) == &value, "attach to wrong node");
        self.members.insert(value, node, key.clone());
        self.keys.insert(key, node);
    }

    /// Takes `key` out of the bucket for `value` and unlinks the bucket's
    /// node if it is now empty. Leaves the key index alone.
    fn detach(&mut self, value: &V, key: &K) {
        if let Some(node) = self.members.remove(value, key) {
            self.seq.remove(node);
            trace!("close bucket - {} buckets", self.seq.len());
        }
    }
}

impl<K, V, C, S> Default for PriorityMap<K, V, C, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V> + Default,
    S: BuildHasher + Clone + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, C, S> Extend<(K, V)> for PriorityMap<K, V, C, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V>,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V, C, S> FromIterator<(K, V)> for PriorityMap<K, V, C, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V> + Default,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
impl<K, V, C, S> PriorityMap<K, V, C, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V>,
    S: BuildHasher + Clone,
{
    /// Panics unless the three structures agree with each other.
    pub(crate) fn check_invariants(&self) {
        let nodes: Vec<_> = self.seq.iter().collect();

        // sorted, distinct, linked both ways
        for w in nodes.windows(2) {
            assert!(self.cmp.precedes(w[0].1, w[1].1), "sequence out of order");
            assert_eq!(self.seq.next(w[0].0), Some(w[1].0));
            assert_eq!(self.seq.prev(w[1].0), Some(w[0].0));
        }
        assert_eq!(self.seq.front(), nodes.first().map(|n| n.0));
        assert_eq!(self.seq.back(), nodes.last().map(|n| n.0));

        // every bucket is non-empty and bound to its node
        assert_eq!(self.members.len(), nodes.len());
        let mut total = 0;
        for &(id, v) in &nodes {
            assert_eq!(self.members.node(v), Some(id));
            let n = self.members.bucket_len(v);
            assert!(n > 0, "empty bucket retained");
            for k in self.members.keys(v) {
                assert_eq!(self.keys.get(k), Some(&id));
            }
            total += n;
        }
        assert_eq!(total, self.keys.len());
        assert!(self.seq.len() <= self.keys.len());
    }
}
