//! # Core Type Definitions
//!
//! This module contains the types shared by every derived operation:
//! - Traversal control (`Step`)
//! - Error types (`EnumerableError`)
//!
//! ## Control Guarantees
//!
//! A traversal primitive receives a `Step` back from every visit.
//! `Step::Stop` is the ONLY way to end a traversal early; predicate results
//! are never reused as control signals.

use thiserror::Error;

// =============================================================================
// STEP
// =============================================================================

/// Control signal returned to a traversal primitive after each visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Visit the next element.
    #[default]
    Continue,
    /// End the traversal after the current element.
    Stop,
}

impl Step {
    /// `Stop` when `done` holds, `Continue` otherwise.
    #[must_use]
    pub const fn stop_if(done: bool) -> Self {
        if done { Self::Stop } else { Self::Continue }
    }

    /// Check if this step ends the traversal.
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while enumerating a target.
///
/// - No silent defaults: a failed traversal is never reported as an empty result
/// - Use `Result<T, EnumerableError>` for every operation that traverses
/// - Derived operations never panic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerableError {
    /// The target is absent, so there is nothing to traverse.
    #[error("Missing target: nothing to traverse")]
    MissingTarget,

    /// `reduce` was called on an empty target without an initial value.
    #[error("Reduce of empty target with no initial value")]
    EmptyReduce,

    /// The operation exists for parity but has no implementation.
    #[error("Not yet implemented: {0}")]
    NotImplemented(&'static str),

    /// `each_slice` was asked for slices of zero elements.
    #[error("Invalid slice size: must be at least 1")]
    InvalidSliceSize,

    /// A custom traversal primitive reported a failure.
    #[error("Traversal failed: {0}")]
    Traversal(String),
}

// =============================================================================
// TESTS
// =============================================================================
