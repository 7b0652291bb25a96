//! # Collaborator Primitives
//!
//! Small pure helpers the derived operations are built from.
//!
//! ## Primitives
//!
//! 1. **Negation**: flips a `(value, key, container)` predicate (used by `reject`).
//!
//! The identity order used by default comparisons lives in `order::Natural`.

/// Negate a `(value, key, container)` predicate.
///
/// `negate(p)(v, k, c) == !p(v, k, c)` for every input.
pub fn negate<V, K, C, P>(mut predicate: P) -> impl FnMut(&V, &K, &C) -> bool
where
    V: ?Sized,
    K: ?Sized,
    C: ?Sized,
    P: FnMut(&V, &K, &C) -> bool,
{
    move |value: &V, key: &K, container: &C| !predicate(value, key, container)
}
