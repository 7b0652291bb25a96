//! # Groups Module
//!
//! Result container for `group_by`.
//!
//! - Groups keep the order in which their keys were first seen
//! - Members keep traversal order
//! - Key lookup goes through a `BTreeMap` index (deterministic, no hashing)

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Elements partitioned by a grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<G, V> {
    /// Groups in first-seen key order.
    groups: Vec<(G, Vec<V>)>,
    /// Key -> position in `groups`.
    index: BTreeMap<G, usize>,
}

impl<G, V> Default for Groups<G, V> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<G: Ord + Clone, V> Groups<G, V> {
    /// Create an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the group for `key`, creating the group on first use.
    pub fn push(&mut self, key: G, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].1.push(value);
            return;
        }
        self.index.insert(key.clone(), self.groups.len());
        self.groups.push((key, vec![value]));
    }

    /// Members of the group for `key`, if any element produced it.
    #[must_use]
    pub fn get(&self, key: &G) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Check if any element produced `key`.
    #[must_use]
    pub fn contains_key(&self, key: &G) -> bool {
        self.index.contains_key(key)
    }
}

impl<G, V> Groups<G, V> {
    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no element was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &G> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// `(key, members)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&G, &[V])> {
        self.groups
            .iter()
            .map(|(key, members)| (key, members.as_slice()))
    }
}

impl<G, V> IntoIterator for Groups<G, V> {
    type Item = (G, Vec<V>);
    type IntoIter = std::vec::IntoIter<(G, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Serialized as a map in first-seen key order.
impl<G: Serialize, V: Serialize> Serialize for Groups<G, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter().map(|(key, members)| (key, members)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
