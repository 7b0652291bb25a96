//! # Enumerable Trait
//!
//! One required traversal primitive, every sequence operation derived from it.
//!
//! A target implements `for_each_entry` and receives all other operations as
//! default methods. Any of them can be redefined in the target's own `impl`
//! block; the derived version only fills the gap when it is absent.

use crate::groups::Groups;
use crate::order::Comparator;
use crate::primitives::negate;
use crate::{EnumerableError, Step};
use std::cmp::Ordering;

// =============================================================================
// ENUMERABLE TRAIT
// =============================================================================

/// The Enumerable trait derives sequence operations from a single traversal.
///
/// Callbacks receive `(value, key, container)` where `container` is the target
/// itself. Operations marked *strict* take a user callback; all of them run
/// exactly one traversal (`range_by` adds a `first` probe) and build a fresh
/// result.
///
/// All operations return `Result<T, EnumerableError>` so that fallible or
/// absent targets surface their failure instead of an empty result.
pub trait Enumerable {
    /// Element type visited by the traversal.
    type Value;

    /// Position or lookup key of each element.
    type Key;

    /// The traversal primitive.
    ///
    /// Calls `visit(&value, &key)` once per element in a well-defined order and
    /// ends after the first visit that returns `Step::Stop`.
    fn for_each_entry<F>(&self, visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key) -> Step;

    /// Visit every element with the target passed as container.
    fn each<F>(&self, mut callback: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> Step,
    {
        self.for_each_entry(|value, key| callback(value, key, self))
    }

    /// Check if some element equals `item`. Stops on the first match.
    fn contains(&self, item: &Self::Value) -> Result<bool, EnumerableError>
    where
        Self::Value: PartialEq,
    {
        let mut found = false;
        self.for_each_entry(|value, _| {
            found = value == item;
            Step::stop_if(found)
        })?;
        Ok(found)
    }

    /// Check if `predicate` holds for every element (strict).
    ///
    /// Stops at the first element that fails. An empty target yields `true`.
    fn every<F>(&self, mut predicate: F) -> Result<bool, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
    {
        let mut all = true;
        self.for_each_entry(|value, key| {
            all = predicate(value, key, self);
            Step::stop_if(!all)
        })?;
        Ok(all)
    }

    /// Check if `predicate` holds for any element (strict).
    ///
    /// Stops at the first element that passes. An empty target yields `false`.
    fn some<F>(&self, mut predicate: F) -> Result<bool, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
    {
        let mut any = false;
        self.for_each_entry(|value, key| {
            any = predicate(value, key, self);
            Step::stop_if(any)
        })?;
        Ok(any)
    }

    /// Elements for which `predicate` holds, in traversal order (strict).
    fn filter<F>(&self, mut predicate: F) -> Result<Vec<Self::Value>, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
        Self::Value: Clone,
    {
        let mut kept = Vec::new();
        self.for_each_entry(|value, key| {
            if predicate(value, key, self) {
                kept.push(value.clone());
            }
            Step::Continue
        })?;
        Ok(kept)
    }

    /// Elements for which `predicate` does NOT hold (strict).
    fn reject<F>(&self, predicate: F) -> Result<Vec<Self::Value>, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
        Self::Value: Clone,
    {
        self.filter(negate(predicate))
    }

    /// Split into `(matching, rest)` in a single traversal (strict).
    fn partition<F>(
        &self,
        mut predicate: F,
    ) -> Result<(Vec<Self::Value>, Vec<Self::Value>), EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
        Self::Value: Clone,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        self.for_each_entry(|value, key| {
            if predicate(value, key, self) {
                matching.push(value.clone());
            } else {
                rest.push(value.clone());
            }
            Step::Continue
        })?;
        Ok((matching, rest))
    }

    /// First element for which `predicate` holds (strict). Stops on the match.
    fn find<F>(&self, mut predicate: F) -> Result<Option<Self::Value>, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
        Self::Value: Clone,
    {
        let mut hit = None;
        self.for_each_entry(|value, key| {
            if predicate(value, key, self) {
                hit = Some(value.clone());
                return Step::Stop;
            }
            Step::Continue
        })?;
        Ok(hit)
    }

    /// Last element for which `predicate` holds (strict). Full traversal.
    fn find_last<F>(&self, mut predicate: F) -> Result<Option<Self::Value>, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> bool,
        Self::Value: Clone,
    {
        let mut hit = None;
        self.for_each_entry(|value, key| {
            if predicate(value, key, self) {
                hit = Some(value.clone());
            }
            Step::Continue
        })?;
        Ok(hit)
    }

    /// First traversed element.
    fn first(&self) -> Result<Option<Self::Value>, EnumerableError>
    where
        Self::Value: Clone,
    {
        let mut head = None;
        self.for_each_entry(|value, _| {
            head = Some(value.clone());
            Step::Stop
        })?;
        Ok(head)
    }

    /// Last traversed element.
    fn last(&self) -> Result<Option<Self::Value>, EnumerableError>
    where
        Self::Value: Clone,
    {
        let mut tail = None;
        self.for_each_entry(|value, _| {
            tail = Some(value.clone());
            Step::Continue
        })?;
        Ok(tail)
    }

    /// Group elements by the key `key_of` returns (strict).
    ///
    /// A group is created the first time its key is produced; members keep
    /// traversal order.
    fn group_by<G, F>(&self, mut key_of: F) -> Result<Groups<G, Self::Value>, EnumerableError>
    where
        G: Ord + Clone,
        F: FnMut(&Self::Value, &Self::Key, &Self) -> G,
        Self::Value: Clone,
    {
        let mut groups = Groups::new();
        self.for_each_entry(|value, key| {
            groups.push(key_of(value, key, self), value.clone());
            Step::Continue
        })?;
        Ok(groups)
    }

    /// Key of the first element equal to `item`. Stops on the match.
    fn index_of(&self, item: &Self::Value) -> Result<Option<Self::Key>, EnumerableError>
    where
        Self::Value: PartialEq,
        Self::Key: Clone,
    {
        let mut position = None;
        self.for_each_entry(|value, key| {
            if value == item {
                position = Some(key.clone());
                return Step::Stop;
            }
            Step::Continue
        })?;
        Ok(position)
    }

    /// Key of the last element equal to `item`. Full traversal.
    fn last_index_of(&self, item: &Self::Value) -> Result<Option<Self::Key>, EnumerableError>
    where
        Self::Value: PartialEq,
        Self::Key: Clone,
    {
        let mut position = None;
        self.for_each_entry(|value, key| {
            if value == item {
                position = Some(key.clone());
            }
            Step::Continue
        })?;
        Ok(position)
    }

    /// One `transform` result per element, in traversal order (strict).
    fn map<U, F>(&self, mut transform: F) -> Result<Vec<U>, EnumerableError>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> U,
    {
        let mut mapped = Vec::new();
        self.for_each_entry(|value, key| {
            mapped.push(transform(value, key, self));
            Step::Continue
        })?;
        Ok(mapped)
    }

    /// Left fold seeded with the first element (strict).
    ///
    /// `combine` is not called for the seed.
    ///
    /// # Errors
    /// Returns `EnumerableError::EmptyReduce` if the target is empty.
    fn reduce<F>(&self, mut combine: F) -> Result<Self::Value, EnumerableError>
    where
        F: FnMut(Self::Value, &Self::Value, &Self::Key, &Self) -> Self::Value,
        Self::Value: Clone,
    {
        let mut acc: Option<Self::Value> = None;
        self.for_each_entry(|value, key| {
            acc = Some(match acc.take() {
                None => value.clone(),
                Some(sofar) => combine(sofar, value, key, self),
            });
            Step::Continue
        })?;
        acc.ok_or_else(|| {
            tracing::debug!("reduce called on an empty target without an initial value");
            EnumerableError::EmptyReduce
        })
    }

    /// Left fold starting from `initial` (strict).
    ///
    /// `reduce_from(init, f)` over `[a, b, c]` is `f(f(f(init, a), b), c)`.
    fn reduce_from<A, F>(&self, initial: A, mut combine: F) -> Result<A, EnumerableError>
    where
        F: FnMut(A, &Self::Value, &Self::Key, &Self) -> A,
    {
        let mut acc = Some(initial);
        self.for_each_entry(|value, key| {
            acc = acc.take().map(|sofar| combine(sofar, value, key, self));
            Step::Continue
        })?;
        match acc {
            Some(folded) => Ok(folded),
            // Refilled before every visit returns; only a panic in `combine` vacates it.
            None => unreachable!("fold accumulator is refilled after every visit"),
        }
    }

    /// Right-to-left fold. Always fails: reverse traversal is not supported.
    fn reduce_right<F>(&self, _combine: F) -> Result<Self::Value, EnumerableError>
    where
        F: FnMut(Self::Value, &Self::Value, &Self::Key, &Self) -> Self::Value,
    {
        tracing::debug!("reduce_right called; no reverse traversal available");
        Err(EnumerableError::NotImplemented("reduce_right"))
    }

    /// Greatest element under `order`; the first of equal maxima wins.
    fn max_by<C>(&self, order: C) -> Result<Option<Self::Value>, EnumerableError>
    where
        C: Comparator<Self::Value>,
        Self::Value: Clone,
    {
        absent_if_empty(self.reduce(|best, value, _, _| {
            if order.compare(value, &best) == Ordering::Greater {
                value.clone()
            } else {
                best
            }
        }))
    }

    /// Least element under `order`; the first of equal minima wins.
    fn min_by<C>(&self, order: C) -> Result<Option<Self::Value>, EnumerableError>
    where
        C: Comparator<Self::Value>,
        Self::Value: Clone,
    {
        absent_if_empty(self.reduce(|best, value, _, _| {
            if order.compare(value, &best) == Ordering::Less {
                value.clone()
            } else {
                best
            }
        }))
    }

    /// `(min, max)` under `order` in one traversal seeded from `first`.
    ///
    /// Per element the min check runs first; an element never updates both
    /// bounds.
    fn range_by<C>(
        &self,
        order: C,
    ) -> Result<Option<(Self::Value, Self::Value)>, EnumerableError>
    where
        C: Comparator<Self::Value>,
        Self::Value: Clone,
    {
        let Some(seed) = self.first()? else {
            return Ok(None);
        };
        let mut low = seed.clone();
        let mut high = seed;
        self.for_each_entry(|value, _| {
            if order.compare(value, &low) == Ordering::Less {
                low = value.clone();
            } else if order.compare(value, &high) == Ordering::Greater {
                high = value.clone();
            }
            Step::Continue
        })?;
        Ok(Some((low, high)))
    }

    /// Number of traversed elements.
    fn size(&self) -> Result<usize, EnumerableError> {
        let mut count = 0usize;
        self.for_each_entry(|_, _| {
            count = count.saturating_add(1);
            Step::Continue
        })?;
        Ok(count)
    }

    /// Every element except the first.
    fn tail(&self) -> Result<Vec<Self::Value>, EnumerableError>
    where
        Self::Value: Clone,
    {
        let mut rest = Vec::new();
        let mut skipped = false;
        self.for_each_entry(|value, _| {
            if skipped {
                rest.push(value.clone());
            } else {
                skipped = true;
            }
            Step::Continue
        })?;
        Ok(rest)
    }

    /// Every element, in traversal order.
    fn to_vec(&self) -> Result<Vec<Self::Value>, EnumerableError>
    where
        Self::Value: Clone,
    {
        let mut all = Vec::new();
        self.for_each_entry(|value, _| {
            all.push(value.clone());
            Step::Continue
        })?;
        Ok(all)
    }

    /// `(key, value)` pairs in traversal order.
    fn entries(&self) -> Result<Vec<(Self::Key, Self::Value)>, EnumerableError>
    where
        Self::Key: Clone,
        Self::Value: Clone,
    {
        let mut pairs = Vec::new();
        self.for_each_entry(|value, key| {
            pairs.push((key.clone(), value.clone()));
            Step::Continue
        })?;
        Ok(pairs)
    }

    /// Consecutive runs of `len` elements; the last run may be shorter.
    ///
    /// # Errors
    /// Returns `EnumerableError::InvalidSliceSize` if `len` is zero.
    fn each_slice(&self, len: usize) -> Result<Vec<Vec<Self::Value>>, EnumerableError>
    where
        Self::Value: Clone,
    {
        if len == 0 {
            tracing::debug!("each_slice called with a zero slice length");
            return Err(EnumerableError::InvalidSliceSize);
        }

        let mut slices = Vec::new();
        let mut current = Vec::with_capacity(len);
        self.for_each_entry(|value, _| {
            current.push(value.clone());
            if current.len() == len {
                slices.push(std::mem::replace(&mut current, Vec::with_capacity(len)));
            }
            Step::Continue
        })?;
        if !current.is_empty() {
            slices.push(current);
        }
        Ok(slices)
    }
}

/// Map `EmptyReduce` to `Ok(None)`, keeping every other outcome.
fn absent_if_empty<T>(reduced: Result<T, EnumerableError>) -> Result<Option<T>, EnumerableError> {
    match reduced {
        Ok(value) => Ok(Some(value)),
        Err(EnumerableError::EmptyReduce) => Ok(None),
        Err(e) => Err(e),
    }
}

// =============================================================================
// TESTS
// =============================================================================
