//! # enumerable-core
//!
//! A single trait, `Enumerable`, that turns one traversal primitive into a full
//! suite of sequence operations.
//!
//! A target supplies `for_each_entry`, which visits `(value, key)` pairs in a
//! well-defined order and stops when the visitor returns `Step::Stop`. Every
//! other operation (`contains`, `every`, `some`, `filter`, `reject`, `find`,
//! `find_last`, `first`, `last`, `group_by`, `index_of`, `last_index_of`, `map`,
//! `reduce`, `max_by`, `min_by`, `range_by`, `size`, `tail`, `to_vec`, ...) is
//! derived from it.
//!
//! ## Architectural Constraints
//!
//! - Stateless: the trait holds no data, every call builds a fresh result
//! - Synchronous: no async, no I/O, no background work
//! - Additive: derived operations are default methods; a target that defines
//!   its own version keeps it
//!
//! ```
//! use enumerable_core::{ByKey, Enumerable};
//!
//! let words = vec!["zero", "one", "two", "three"];
//! assert_eq!(words.filter(|_, k, _| k % 2 == 0), Ok(vec!["zero", "two"]));
//! assert_eq!(words.max_by(ByKey(|w: &&str| w.len())), Ok(Some("three")));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod enumerable;
pub mod groups;
pub mod order;
pub mod primitives;
pub mod targets;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{EnumerableError, Step};

// =============================================================================
// RE-EXPORTS: Trait & Results
// =============================================================================

pub use enumerable::Enumerable;
pub use groups::Groups;
pub use order::{By, ByKey, Comparator, Natural};
pub use primitives::negate;
pub use targets::{FromFn, from_fn};
