//! # Canonical Type Tags
//!
//! Defines the `TypeTag` enum: the seven canonical tags the engine assigns
//! to runtime values. This is the ONE tag vocabulary used everywhere —
//! mismatch errors, cast accessors, and schema descriptions all speak it.
//! Every `match` on `TypeTag` must be exhaustive, so adding a tag forces
//! every consumer to handle it at compile time.
//!
//! ## Tag Vocabulary
//!
//! | # | Tag | Value payload |
//! |---|--------|---------------------------------|
//! | 1 | null | none |
//! | 2 | bool | `bool` |
//! | 3 | int | `i64` |
//! | 4 | float | `f64` |
//! | 5 | string | `String` |
//! | 6 | array | ordered int-or-string-keyed map |
//! | 7 | object | opaque host instance |
//!
//! Note that `int` and `float` are distinct tags with no coercion between
//! them: an `int` value never satisfies a `float` demand or vice versa.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use thiserror::Error;

/// Canonical type tag of a runtime value.
///
/// The tag is a total function of the value: every value carries exactly
/// one tag, and the tag alone decides which cast accessor succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// The null value.
    Null,
    /// Boolean.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// IEEE-754 double. Never interchangeable with `Int`.
    Float,
    /// UTF-8 string.
    String,
    /// Ordered entry map (list or named map).
    Array,
    /// Opaque host object instance.
    Object,
}

/// Total number of canonical tags. Used for exhaustiveness assertions.
pub const TYPE_TAG_COUNT: usize = 7;

impl TypeTag {
    /// Returns all tags in canonical order.
    pub fn all() -> &'static [TypeTag] {
        &[
            Self::Null,
            Self::Bool,
            Self::Int,
            Self::Float,
            Self::String,
            Self::Array,
            Self::Object,
        ]
    }

    /// Returns the lowercase string identifier for this tag.
    ///
    /// This must match the serde serialization format and the `"type"`
    /// field emitted by schema descriptions for scalar shapes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not name any canonical type tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag: {found:?}")]
pub struct ParseTypeTagError {
    /// The rejected input.
    pub found: String,
}

impl FromStr for TypeTag {
    type Err = ParseTypeTagError;

    /// Parse a tag from its lowercase identifier.
    ///
    /// Accepts exactly the identifiers produced by [`TypeTag::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(ParseTypeTagError {
                found: other.to_string(),
            }),
        }
    }
}
