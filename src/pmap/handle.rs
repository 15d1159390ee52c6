use std::hash::{BuildHasher, Hash};

use super::{compare::Compare, map::PriorityMap, step::Step};

/// The priority of one key, borrowed from a [`PriorityMap`].
///
/// Made by [`PriorityMap::at`], which has already inserted the key if it was
/// missing. Every write goes through [`PriorityMap::set`].
pub struct Handle<'a, K, V, C, S> {
    map: &'a mut PriorityMap<K, V, C, S>,
    key: K,
}

impl<'a, K, V, C, S> Handle<'a, K, V, C, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Default,
    C: Compare<V>,
    S: BuildHasher + Clone,
{
    pub(super) fn new(map: &'a mut PriorityMap<K, V, C, S>, key: K) -> Self {
        debug_assert!(map.contains_key(&key), "handle to absent key");
        Handle { map, key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn read(&self) -> V {
        let value = self.map.get(&self.key);
        debug_assert!(value.is_some(), "handle to absent key");
        value.cloned().unwrap_or_default()
    }

    /// Replaces the priority.
    pub fn assign(&mut self, value: V) {
        self.map.set(self.key.clone(), value);
    }

    /// Adds one. Returns the new priority.
    pub fn increment(&mut self) -> V
    where
        V: Step,
    {
        let value = self.read().succ();
        self.assign(value.clone());
        value
    }

    /// Subtracts one. Returns the new priority.
    pub fn decrement(&mut self) -> V
    where
        V: Step,
    {
        let value = self.read().pred();
        self.assign(value.clone());
        value
    }
}

#[cfg(test)]
mod test {
    use crate::pmap::{Less, PriorityMap};

    #[test]
    fn read_inserts_default() {
        let mut pm: PriorityMap<i32, i32> = PriorityMap::new();
        assert_eq!(pm.get(&7), None);
        assert_eq!(pm.at(7).read(), 0);
        assert_eq!(pm.count(&7), 1);
        assert_eq!(pm.get(&7), Some(&0));
    }

    #[test]
    fn increment_twice() {
        let mut pm: PriorityMap<i32, i32> = PriorityMap::new();
        assert_eq!(pm.at(7).increment(), 1);
        assert_eq!(pm.at(7).increment(), 2);
        assert_eq!(pm.at(7).read(), 2);
    }

    #[test]
    fn assign_then_read() {
        let mut pm: PriorityMap<i32, i32> = PriorityMap::new();
        pm.at(7).assign(456);
        assert_eq!(pm.at(7).read(), 456);
    }

    #[test]
    fn decrement_below_zero() {
        let mut pm: PriorityMap<i32, i32> = PriorityMap::new();
        pm.at(7).decrement();
        pm.at(9).increment();
        assert_eq!(pm.at(7).read(), -1);
        assert_eq!(pm.top(), Ok((&9, &1)));
    }

    #[test]
    fn decrement_with_ties() {
        let mut pm: PriorityMap<i32, i32> = PriorityMap::new();
        pm.at(7).decrement();
        pm.at(8).increment();
        pm.at(9).increment();
        pm.at(9).increment();
        assert_eq!(pm.at(7).read(), -1);
        assert_eq!(pm.top(), Ok((&9, &2)));
        pm.check_invariants();
    }

    #[test]
    fn one_handle_many_writes() {
        let mut pm: PriorityMap<&str, i64, Less> = PriorityMap::with_comparator(Less);
        let mut h = pm.at("k");
        assert_eq!(h.key(), &"k");
        for _ in 0..5 {
            h.decrement();
        }
        h.increment();
        assert_eq!(h.read(), -4);
        h.assign(3);
        assert_eq!(h.read(), 3);
        pm.check_invariants();
        assert_eq!(pm.distinct_values(), 1);
    }

    #[test]
    fn unsigned_decrement_at_zero_wraps() {
        let mut pm: PriorityMap<char, u32> = PriorityMap::new();
        assert_eq!(pm.at('a').decrement(), u32::MAX);
        assert_eq!(pm.top(), Ok((&'a', &u32::MAX)));
        assert_eq!(pm.at('a').increment(), 0);
        assert_eq!(pm.get(&'a'), Some(&0));
        pm.check_invariants();
    }

    #[test]
    fn unsigned_priorities() {
        let mut pm: PriorityMap<char, u32> = PriorityMap::new();
        for c in "abcabca".chars() {
            pm.at(c).increment();
        }
        assert_eq!(pm.top(), Ok((&'a', &3)));
        pm.at('a').decrement();
        pm.at('a').decrement();
        let mut tied: Vec<_> = pm.keys_at(&2).copied().collect();
        tied.sort();
        assert_eq!(tied, vec!['b', 'c']);
        pm.check_invariants();
    }
}
