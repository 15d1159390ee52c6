//! Orderings for the bucket sequence.
//!
//! A comparator answers "does `a` belong strictly in front of `b`?". The
//! front of the sequence is what `top()` reports, so [`Greater`] gives a
//! max-first map and [`Less`] a min-first one.

pub trait Compare<V> {
    fn precedes(&self, a: &V, b: &V) -> bool;
}

/// Largest value first. The default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

/// Smallest value first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

impl<V: Ord> Compare<V> for Greater {
    #[inline]
    fn precedes(&self, a: &V, b: &V) -> bool {
        a > b
    }
}

impl<V: Ord> Compare<V> for Less {
    #[inline]
    fn precedes(&self, a: &V, b: &V) -> bool {
        a < b
    }
}

impl<V, F> Compare<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    #[inline]
    fn precedes(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::{Compare, Greater, Less};

    #[test]
    fn greater_puts_max_first() {
        assert!(Greater.precedes(&3, &2));
        assert!(!Greater.precedes(&2, &3));
        assert!(!Greater.precedes(&2, &2));
    }

    #[test]
    fn less_puts_min_first() {
        assert!(Less.precedes(&-1, &0));
        assert!(!Less.precedes(&0, &-1));
        assert!(!Less.precedes(&0, &0));
    }

    #[test]
    fn closure_comparator() {
        // order by distance from 10
        let c = |a: &i32, b: &i32| (a - 10).abs() < (b - 10).abs();
        assert!(c.precedes(&9, &5));
        assert!(!c.precedes(&20, &12));
    }
}
