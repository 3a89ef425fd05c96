//! Error types for the predicate registry.
//!
//! Predicates themselves never fail: every classifier is total over
//! [`Value`](crate::Value) and reports out-of-contract inputs as `false`.
//! The only fallible surface is dynamic dispatch through the registry,
//! which can be handed a name it does not know or the wrong number of
//! arguments.

use thiserror::Error;

/// Errors from dynamic predicate dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown predicate: {name}")]
    UnknownPredicate { name: String },

    #[error("Predicate '{name}' takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl RegistryError {
    /// Returns true if this is an unknown-name error.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownPredicate { .. })
    }

    /// Returns true if this is an arity error.
    #[must_use]
    pub const fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }
}

/// Result type alias for registry operations.
pub type IsResult<T> = Result<T, RegistryError>;
