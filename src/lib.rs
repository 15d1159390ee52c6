//! A priority map: keys with priorities, best priority always on top.
//!
//! [`PriorityMap`] groups keys sharing a priority into buckets and keeps the
//! buckets in a sorted linked sequence. Stepping a priority up or down by one
//! is amortized O(1), which suits counters that churn by small amounts:
//! in-degrees in a topological sort, character frequencies, greedy
//! schedulers.
//!
//! ```
//! use priomap::{Less, PriorityMap};
//!
//! let mut pm: PriorityMap<&str, i32, Less> = PriorityMap::with_comparator(Less);
//! pm.at("b").increment();
//! pm.at("a").assign(-3);
//! assert_eq!(pm.top(), Ok((&"a", &-3)));
//! ```
//!
//! [`UnionFind`] is a separate disjoint-set utility.

pub mod pmap;
pub mod union_find;

pub use pmap::{Compare, Error, Greater, Handle, Less, PriorityMap, Result, Step};
pub use union_find::UnionFind;
