//! # Core Error Types
//!
//! The only error the value layer itself can produce is a type mismatch:
//! a value's canonical tag differing from the tag a caller demanded. Richer
//! classification (constraint violations, missing keys, and so on) lives in
//! `argot-schema`, which wraps this type via `#[from]`.

use thiserror::Error;

use crate::tag::TypeTag;

/// A value's canonical type tag did not match the expected tag.
///
/// Carries both sides so callers can report or branch on the exact
/// disagreement without re-deriving it from the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected type `{expected}`, found `{actual}`")]
pub struct TypeMismatch {
    /// The tag the caller or descriptor demanded.
    pub expected: TypeTag,
    /// The tag computed from the offending value.
    pub actual: TypeTag,
}

impl TypeMismatch {
    /// Builds a mismatch record from the demanded and observed tags.
    pub fn new(expected: TypeTag, actual: TypeTag) -> Self {
        Self { expected, actual }
    }
}
