//! # Order Module
//!
//! Comparison strategies shared by `max_by`, `min_by` and `range_by`.
//!
//! The caller picks the strategy explicitly:
//! - `Natural`: the values' own order (identity key)
//! - `ByKey`: a one-argument key extractor, keys ordered by `>` / `<`
//! - `By`: a two-argument comparator used as-is

use std::cmp::Ordering;

/// A total-ish order over `T` used to pick extremal elements.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Order values by `>` then `<`; anything else counts as equal.
///
/// Incomparable pairs (e.g. NaN) therefore never displace each other.
fn ordering_of<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Natural order of the values themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        ordering_of(a, b)
    }
}

/// Order by a key extracted from each value.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        ordering_of(&(self.0)(a), &(self.0)(b))
    }
}

/// Order by an explicit three-way comparator.
#[derive(Debug, Clone, Copy)]
pub struct By<F>(pub F);

impl<T, F> Comparator<T> for By<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

// =============================================================================
// TESTS
// =============================================================================
