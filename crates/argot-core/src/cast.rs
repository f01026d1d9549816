//! # Typed Cast Wrapper
//!
//! `Cast` wraps an already-validated value and hands out its payload
//! through per-tag accessors. The tag is computed once at wrap time; an
//! accessor either matches it and yields the payload, or fails immediately
//! with a [`TypeMismatch`] naming both the requested and the actual tag.
//! No accessor coerces — asking an `int` cast for a `float` fails.

use crate::error::TypeMismatch;
use crate::instance::Instance;
use crate::tag::TypeTag;
use crate::value::{Array, Value};

/// Fail-fast typed extraction around a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    value: Value,
    tag: TypeTag,
}

impl Cast {
    /// Wraps a value, recording its canonical tag.
    pub fn new(value: Value) -> Self {
        let tag = value.tag();
        Self { value, tag }
    }

    /// The tag recorded at wrap time.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Borrows the wrapped value regardless of tag.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwraps back into the value.
    pub fn into_value(self) -> Value {
        self.value
    }

    fn mismatch(&self, expected: TypeTag) -> TypeMismatch {
        TypeMismatch::new(expected, self.tag)
    }

    /// Succeeds iff the wrapped value is `null`.
    pub fn as_null(&self) -> Result<(), TypeMismatch> {
        match self.value {
            Value::Null => Ok(()),
            _ => Err(self.mismatch(TypeTag::Null)),
        }
    }

    /// The boolean payload.
    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self.value {
            Value::Bool(b) => Ok(b),
            _ => Err(self.mismatch(TypeTag::Bool)),
        }
    }

    /// The integer payload.
    pub fn as_int(&self) -> Result<i64, TypeMismatch> {
        match self.value {
            Value::Int(i) => Ok(i),
            _ => Err(self.mismatch(TypeTag::Int)),
        }
    }

    /// The float payload.
    pub fn as_float(&self) -> Result<f64, TypeMismatch> {
        match self.value {
            Value::Float(x) => Ok(x),
            _ => Err(self.mismatch(TypeTag::Float)),
        }
    }

    /// The string payload.
    pub fn as_string(&self) -> Result<&str, TypeMismatch> {
        match &self.value {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(TypeTag::String)),
        }
    }

    /// The array payload.
    pub fn as_array(&self) -> Result<&Array, TypeMismatch> {
        match &self.value {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(TypeTag::Array)),
        }
    }

    /// The instance payload.
    pub fn as_object(&self) -> Result<&Instance, TypeMismatch> {
        match &self.value {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch(TypeTag::Object)),
        }
    }
}

impl From<Value> for Cast {
    fn from(value: Value) -> Self {
        Cast::new(value)
    }
}
