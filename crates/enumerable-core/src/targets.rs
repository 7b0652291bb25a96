//! # Targets
//!
//! `Enumerable` implementations for standard containers plus two adapters:
//! - `Option<E>`: an optional target; `None` fails with `MissingTarget`
//! - `FromFn`: a target whose traversal is an arbitrary closure
//!
//! Index-ordered containers key their elements by position. Containers that
//! know their length override `size` (and where cheap, `first`/`last`/`to_vec`)
//! instead of taking the derived full traversal.

use crate::enumerable::Enumerable;
use crate::{EnumerableError, Step};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// SEQUENCES (key = position)
// =============================================================================

/// Visit `items` keyed by position until the visitor stops.
fn visit_indexed<'a, T: 'a, F>(
    items: impl Iterator<Item = &'a T>,
    mut visit: F,
) -> Result<(), EnumerableError>
where
    F: FnMut(&T, &usize) -> Step,
{
    for (index, item) in items.enumerate() {
        if visit(item, &index).is_stop() {
            break;
        }
    }
    Ok(())
}

impl<T> Enumerable for [T] {
    type Value = T;
    type Key = usize;

    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&T, &usize) -> Step,
    {
        visit_indexed(self.iter(), visit)
    }

    fn first(&self) -> Result<Option<T>, EnumerableError>
    where
        T: Clone,
    {
        Ok(<[T]>::first(self).cloned())
    }

    fn last(&self) -> Result<Option<T>, EnumerableError>
    where
        T: Clone,
    {
        Ok(<[T]>::last(self).cloned())
    }

    fn size(&self) -> Result<usize, EnumerableError> {
        Ok(self.len())
    }

    fn to_vec(&self) -> Result<Vec<T>, EnumerableError>
    where
        T: Clone,
    {
        Ok(<[T]>::to_vec(self))
    }
}

impl<T> Enumerable for Vec<T> {
    type Value = T;
    type Key = usize;

    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&T, &usize) -> Step,
    {
        self.as_slice().for_each_entry(visit)
    }

    fn first(&self) -> Result<Option<T>, EnumerableError>
    where
        T: Clone,
    {
        Enumerable::first(self.as_slice())
    }

    fn last(&self) -> Result<Option<T>, EnumerableError>
    where
        T: Clone,
    {
        Enumerable::last(self.as_slice())
    }

    fn size(&self) -> Result<usize, EnumerableError> {
        Ok(self.len())
    }

    fn to_vec(&self) -> Result<Vec<T>, EnumerableError>
    where
        T: Clone,
    {
        Ok(self.clone())
    }
}

impl<T> Enumerable for VecDeque<T> {
    type Value = T;
    type Key = usize;

    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&T, &usize) -> Step,
    {
        visit_indexed(self.iter(), visit)
    }

    fn size(&self) -> Result<usize, EnumerableError> {
        Ok(self.len())
    }
}

/// Ascending order; keyed by position.
impl<T> Enumerable for BTreeSet<T> {
    type Value = T;
    type Key = usize;

    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&T, &usize) -> Step,
    {
        visit_indexed(self.iter(), visit)
    }

    fn size(&self) -> Result<usize, EnumerableError> {
        Ok(self.len())
    }
}

// =============================================================================
// MAPS (key = map key)
// =============================================================================

/// Ascending key order; values are the elements.
impl<K, V> Enumerable for BTreeMap<K, V> {
    type Value = V;
    type Key = K;

    fn for_each_entry<F>(&self, mut visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&V, &K) -> Step,
    {
        for (key, value) in self {
            if visit(value, key).is_stop() {
                break;
            }
        }
        Ok(())
    }

    fn size(&self) -> Result<usize, EnumerableError> {
        Ok(self.len())
    }
}

// =============================================================================
// ADAPTERS
// =============================================================================

impl<E: Enumerable + ?Sized> Enumerable for &E {
    type Value = E::Value;
    type Key = E::Key;

    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&E::Value, &E::Key) -> Step,
    {
        (**self).for_each_entry(visit)
    }
}

/// An optional target. `None` has nothing to traverse and fails every
/// operation that needs a traversal.
impl<E: Enumerable> Enumerable for Option<E> {
    type Value = E::Value;
    type Key = E::Key;

    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&E::Value, &E::Key) -> Step,
    {
        match self {
            Some(target) => target.for_each_entry(visit),
            None => {
                tracing::debug!("enumerating an absent target");
                Err(EnumerableError::MissingTarget)
            }
        }
    }
}

/// A target whose traversal primitive is a closure.
///
/// Created with [`from_fn`].
pub struct FromFn<V, K, G> {
    traverse: G,
    marker: PhantomData<fn(&V, &K)>,
}

impl<V, K, G> fmt::Debug for FromFn<V, K, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Build a target from a traversal closure.
///
/// The closure receives the visitor and must stop calling it once it returns
/// `Step::Stop`.
///
/// ```
/// use enumerable_core::{Enumerable, Step, from_fn};
///
/// let evens = from_fn(|visit: &mut dyn FnMut(&u32, &usize) -> Step| {
///     for (i, n) in (0..10u32).step_by(2).enumerate() {
///         if visit(&n, &i).is_stop() {
///             break;
///         }
///     }
///     Ok(())
/// });
/// assert_eq!(evens.size(), Ok(5));
/// assert_eq!(evens.find(|n, _, _| *n > 5), Ok(Some(6)));
/// ```
pub fn from_fn<V, K, G>(traverse: G) -> FromFn<V, K, G>
where
    G: Fn(&mut dyn FnMut(&V, &K) -> Step) -> Result<(), EnumerableError>,
{
    FromFn {
        traverse,
        marker: PhantomData,
    }
}

impl<V, K, G> Enumerable for FromFn<V, K, G>
where
    G: Fn(&mut dyn FnMut(&V, &K) -> Step) -> Result<(), EnumerableError>,
{
    type Value = V;
    type Key = K;

    fn for_each_entry<F>(&self, mut visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&V, &K) -> Step,
    {
        (self.traverse)(&mut visit)
    }
}

// =============================================================================
// TESTS
// =============================================================================
