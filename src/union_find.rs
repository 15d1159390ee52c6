//! Disjoint sets over arbitrary node labels.
//!
//! Union by rank, where a root's rank is the number of nodes under it, and
//! path halving in `find`. Independent of the priority map.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, usize>,
    components: usize,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
            components: 0,
        }
    }
}

impl<T> UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Adds `u` as a singleton. Does nothing if `u` is already present.
    pub fn insert_node(&mut self, u: T) {
        if !self.parent.contains_key(&u) {
            self.parent.insert(u.clone(), u.clone());
            self.rank.insert(u, 1);
            self.components += 1;
        }
    }

    /// Merges the sets holding `u` and `v`. Does nothing unless both are
    /// present.
    pub fn union(&mut self, u: &T, v: &T) {
        let (ru, rv) = match (self.find(u), self.find(v)) {
            (Some(ru), Some(rv)) if ru != rv => (ru, rv),
            _ => return,
        };
        let (nu, nv) = (self.rank[&ru], self.rank[&rv]);
        let (root, child) = if nu >= nv { (ru, rv) } else { (rv, ru) };
        self.parent.insert(child, root.clone());
        self.rank.insert(root, nu + nv);
        self.components -= 1;
        trace!("union: {} components", self.components);
    }

    /// The representative of the set holding `u`, or None if `u` is absent.
    pub fn find(&mut self, u: &T) -> Option<T> {
        let mut cur = u.clone();
        loop {
            let parent = self.parent.get(&cur)?.clone();
            if parent == cur {
                return Some(cur);
            }
            // point at the grandparent
            let grand = self.parent[&parent].clone();
            self.parent.insert(cur, grand.clone());
            cur = grand;
        }
    }

    pub fn connected(&mut self, u: &T, v: &T) -> bool {
        match (self.find(u), self.find(v)) {
            (Some(ru), Some(rv)) => ru == rv,
            _ => false,
        }
    }

    /// Rank of `u` as last recorded. Only meaningful for roots.
    pub fn rank_of(&self, u: &T) -> Option<usize> {
        self.rank.get(u).copied()
    }

    /// Largest rank of any node; the size of the biggest set.
    pub fn max_rank(&self) -> usize {
        self.rank.values().copied().max().unwrap_or(0)
    }
}
