//! # Schema Error Taxonomy
//!
//! One enum covers every way a descriptor can be misbuilt, a value can be
//! rejected, or two descriptors can disagree. Failures inside nested
//! structures are wrapped with their key context (`[key]: ...`) so a deep
//! rejection still reads as a path; the wrapped kind is preserved as the
//! error's `source`, never flattened into a string.

use thiserror::Error;

use argot_core::{TypeMismatch, Value};

/// Any failure raised while building descriptors, validating values,
/// binding arguments, or checking compatibility.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A value's canonical tag did not match the descriptor's shape.
    #[error(transparent)]
    Type(#[from] TypeMismatch),

    /// The tag matched but the shape's constraint rejected the value.
    #[error("{value} does not satisfy {rule}")]
    Constraint {
        /// Human-readable description of the violated rule.
        rule: String,
        /// The offending value.
        value: Value,
    },

    /// A key the collection declares as required was absent from the input.
    #[error("missing required argument `{key}`")]
    MissingRequired {
        /// The absent key.
        key: String,
    },

    /// The input carried a key the collection does not declare.
    #[error("unknown argument `{key}`")]
    UnknownKey {
        /// The undeclared key.
        key: String,
    },

    /// A requested key does not exist where it was looked for.
    #[error("key `{key}` not found")]
    KeyNotFound {
        /// The requested key.
        key: String,
    },

    /// A named entry was rejected; carries the key context.
    #[error("[{key}]: {source}")]
    Argument {
        /// The entry's key.
        key: String,
        /// The underlying rejection.
        source: Box<SchemaError>,
    },

    /// A map entry's key was rejected by the key descriptor.
    #[error("map key: {source}")]
    MapKey {
        /// The underlying rejection.
        source: Box<SchemaError>,
    },

    /// A map entry's value was rejected by the value descriptor.
    #[error("map value [{key}]: {source}")]
    MapValue {
        /// The entry's key, rendered.
        key: String,
        /// The underlying rejection.
        source: Box<SchemaError>,
    },

    /// Two descriptors are not structurally equivalent.
    #[error("incompatible: {reason}")]
    Incompatible {
        /// Which aspect disagreed.
        reason: String,
    },

    /// Pattern text did not compile as a regular expression.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The rejected pattern text.
        pattern: String,
        /// The compiler's complaint.
        reason: String,
    },

    /// A required entry may not carry a defaulted descriptor.
    #[error("required parameter `{key}` must not declare a default")]
    DefaultForbidden {
        /// The entry's key.
        key: String,
    },

    /// An optional entry must carry a defaulted descriptor.
    #[error("optional parameter `{key}` must declare a default")]
    DefaultRequired {
        /// The entry's key.
        key: String,
    },

    /// The operation does not apply to the descriptor's shape.
    #[error("`{operation}` does not apply to shape `{shape}`")]
    Unsupported {
        /// The shape's name.
        shape: &'static str,
        /// The rejected operation.
        operation: &'static str,
    },
}

impl SchemaError {
    /// Wraps a nested rejection with its entry key.
    pub fn argument(key: impl Into<String>, source: SchemaError) -> Self {
        SchemaError::Argument {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error of a context-wrapping chain.
    ///
    /// Walks through `Argument`, `MapKey`, and `MapValue` wrappers; any
    /// other kind is its own root.
    pub fn root(&self) -> &SchemaError {
        match self {
            SchemaError::Argument { source, .. }
            | SchemaError::MapKey { source }
            | SchemaError::MapValue { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argot_core::TypeTag;

    #[test]
    fn test_type_mismatch_is_transparent() {
        let err = SchemaError::from(TypeMismatch::new(TypeTag::Int, TypeTag::Null));
        assert_eq!(err.to_string(), "expected type `int`, found `null`");
    }

    #[test]
    fn test_argument_wrapping_prefixes_key() {
        let inner = SchemaError::from(TypeMismatch::new(TypeTag::String, TypeTag::Int));
        let err = SchemaError::argument("OK", inner);
        assert_eq!(err.to_string(), "[OK]: expected type `string`, found `int`");
    }

    #[test]
    fn test_nested_wrapping_reads_as_a_path() {
        let leaf = SchemaError::MissingRequired {
            key: "nestOne".to_string(),
        };
        let err = SchemaError::argument("nest", leaf.clone());
        assert_eq!(
            err.to_string(),
            "[nest]: missing required argument `nestOne`"
        );
        assert_eq!(err.root(), &leaf);
    }

    #[test]
    fn test_root_of_unwrapped_error_is_itself() {
        let err = SchemaError::UnknownKey {
            key: "ERROR".to_string(),
        };
        assert_eq!(err.root(), &err);
    }

    #[test]
    fn test_source_chain_is_preserved() {
        use std::error::Error as _;
        let inner = SchemaError::from(TypeMismatch::new(TypeTag::Bool, TypeTag::Float));
        let err = SchemaError::argument("flag", inner.clone());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some(inner.to_string()));
    }

    #[test]
    fn test_constraint_renders_value_and_rule() {
        let err = SchemaError::Constraint {
            rule: "regex `[0-9]+`".to_string(),
            value: Value::from("abc"),
        };
        assert_eq!(err.to_string(), "\"abc\" does not satisfy regex `[0-9]+`");
    }
}
