//! # Value Descriptors
//!
//! A `Parameter` describes what a value must look like: a [`Shape`] giving
//! the structural rule, plus an optional default and a human description.
//! Descriptors are immutable; every `with_*` operation returns a new one.
//!
//! ## Default Discipline
//!
//! A default is itself a value the descriptor must accept, and that is
//! enforced at construction time: [`Parameter::with_default`] validates the
//! candidate, and [`Parameter::with_pattern`] revalidates a default that is
//! already present. A descriptor carrying a default that its own rule
//! rejects cannot be built.

use argot_core::{Array, ArrayKey, TypeIdentity, TypeMismatch, TypeTag, Value};

use crate::arguments::Arguments;
use crate::error::SchemaError;
use crate::parameters::Parameters;
use crate::pattern::Pattern;

/// The structural rule of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Accepts only `null`.
    Null,
    /// Accepts any boolean.
    Bool,
    /// Accepts any integer.
    Int,
    /// Accepts any float. Integers do not qualify.
    Float,
    /// Accepts strings fully matching the pattern.
    String(Pattern),
    /// Accepts arrays binding cleanly against the nested collection.
    Array(Parameters),
    /// Accepts arrays whose every entry satisfies the key and value
    /// descriptors.
    Map {
        /// Descriptor for entry keys.
        key: Box<Parameter>,
        /// Descriptor for entry values.
        value: Box<Parameter>,
    },
    /// Accepts instances of exactly the named host type.
    Object(TypeIdentity),
}

impl Shape {
    /// Name used in messages and schema descriptions.
    ///
    /// Distinct from the tag vocabulary: `array` and `map` are different
    /// shapes even though their values share the `array` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Bool => "bool",
            Shape::Int => "int",
            Shape::Float => "float",
            Shape::String(_) => "string",
            Shape::Array(_) => "array",
            Shape::Map { .. } => "map",
            Shape::Object(_) => "object",
        }
    }

    /// The canonical tag a value must carry to fit this shape.
    pub fn tag(&self) -> TypeTag {
        match self {
            Shape::Null => TypeTag::Null,
            Shape::Bool => TypeTag::Bool,
            Shape::Int => TypeTag::Int,
            Shape::Float => TypeTag::Float,
            Shape::String(_) => TypeTag::String,
            Shape::Array(_) | Shape::Map { .. } => TypeTag::Array,
            Shape::Object(_) => TypeTag::Object,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value descriptor: shape, optional default, human description.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    description: String,
    default: Option<Value>,
    shape: Shape,
}

impl Parameter {
    fn with_shape(shape: Shape) -> Self {
        Self {
            description: String::new(),
            default: None,
            shape,
        }
    }

    /// Descriptor accepting only `null`.
    pub fn null() -> Self {
        Self::with_shape(Shape::Null)
    }

    /// Descriptor accepting any boolean.
    pub fn bool() -> Self {
        Self::with_shape(Shape::Bool)
    }

    /// Descriptor accepting any integer.
    pub fn int() -> Self {
        Self::with_shape(Shape::Int)
    }

    /// Descriptor accepting any float.
    pub fn float() -> Self {
        Self::with_shape(Shape::Float)
    }

    /// Descriptor accepting any string.
    pub fn string() -> Self {
        Self::with_shape(Shape::String(Pattern::any()))
    }

    /// Descriptor accepting strings fully matching `pattern`.
    pub fn string_matching(pattern: Pattern) -> Self {
        Self::with_shape(Shape::String(pattern))
    }

    /// Descriptor accepting arrays that bind against `parameters`.
    pub fn array(parameters: Parameters) -> Self {
        Self::with_shape(Shape::Array(parameters))
    }

    /// Descriptor accepting arrays whose entries satisfy `key` and `value`.
    pub fn map(key: Parameter, value: Parameter) -> Self {
        Self::with_shape(Shape::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Descriptor accepting instances of exactly `T`.
    pub fn object<T: 'static>() -> Self {
        Self::with_shape(Shape::Object(TypeIdentity::of::<T>()))
    }

    /// Returns a copy with the given description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns a copy carrying `default`.
    ///
    /// The candidate is validated against this descriptor and stored in its
    /// normalized form (nested collections come back with their own
    /// defaults filled).
    ///
    /// # Errors
    ///
    /// Whatever [`Parameter::validate`] reports for the candidate.
    pub fn with_default(mut self, default: impl Into<Value>) -> Result<Self, SchemaError> {
        let normalized = self.validate(&default.into())?;
        self.default = Some(normalized);
        Ok(self)
    }

    /// Returns a copy with the string constraint replaced.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Unsupported`] for non-string shapes; otherwise, a
    /// default already present is revalidated against the new pattern and
    /// its rejection is returned unchanged.
    pub fn with_pattern(mut self, pattern: Pattern) -> Result<Self, SchemaError> {
        match &mut self.shape {
            Shape::String(current) => *current = pattern,
            other => {
                return Err(SchemaError::Unsupported {
                    shape: other.name(),
                    operation: "with_pattern",
                })
            }
        }
        if let Some(default) = &self.default {
            self.validate(default)?;
        }
        Ok(self)
    }

    /// The human description, empty by default.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The default, if one was declared.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The structural rule.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The string constraint, for string-shaped descriptors.
    pub fn pattern(&self) -> Option<&Pattern> {
        match &self.shape {
            Shape::String(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// The nested collection, for array-shaped descriptors.
    pub fn parameters(&self) -> Option<&Parameters> {
        match &self.shape {
            Shape::Array(parameters) => Some(parameters),
            _ => None,
        }
    }

    /// The accepted host type, for object-shaped descriptors.
    pub fn class(&self) -> Option<TypeIdentity> {
        match &self.shape {
            Shape::Object(identity) => Some(*identity),
            _ => None,
        }
    }

    /// Validates a value, returning its normalized form.
    ///
    /// Scalars pass on tag match, strings additionally on the pattern,
    /// objects on instance identity. Arrays bind against the nested
    /// collection and come back with defaults filled; map entries are
    /// checked one by one, keys first. Everything else about the value is
    /// returned untouched.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Type`] when the tag does not fit the shape;
    /// [`SchemaError::Constraint`] when the tag fits but the pattern or
    /// instance identity does not; binding errors, wrapped with their key
    /// context, for nested structures.
    pub fn validate(&self, value: &Value) -> Result<Value, SchemaError> {
        match &self.shape {
            Shape::Null => match value {
                Value::Null => Ok(Value::Null),
                other => Err(self.mismatch(other)),
            },
            Shape::Bool => match value {
                Value::Bool(_) => Ok(value.clone()),
                other => Err(self.mismatch(other)),
            },
            Shape::Int => match value {
                Value::Int(_) => Ok(value.clone()),
                other => Err(self.mismatch(other)),
            },
            Shape::Float => match value {
                Value::Float(_) => Ok(value.clone()),
                other => Err(self.mismatch(other)),
            },
            Shape::String(pattern) => match value {
                Value::String(s) if pattern.matches(s) => Ok(value.clone()),
                Value::String(_) => Err(SchemaError::Constraint {
                    rule: format!("regex `{}`", pattern.as_str()),
                    value: value.clone(),
                }),
                other => Err(self.mismatch(other)),
            },
            Shape::Array(parameters) => match value {
                Value::Array(array) => {
                    let bound = Arguments::bind(parameters, array)?;
                    Ok(Value::Array(bound.into_array()))
                }
                other => Err(self.mismatch(other)),
            },
            Shape::Map {
                key: key_descriptor,
                value: value_descriptor,
            } => match value {
                Value::Array(array) => {
                    let mut normalized = Array::new();
                    for (key, entry) in array {
                        let key_value = match key {
                            ArrayKey::Int(i) => Value::Int(*i),
                            ArrayKey::Str(s) => Value::String(s.clone()),
                        };
                        key_descriptor.validate(&key_value).map_err(|e| {
                            SchemaError::MapKey {
                                source: Box::new(e),
                            }
                        })?;
                        let checked =
                            value_descriptor
                                .validate(entry)
                                .map_err(|e| SchemaError::MapValue {
                                    key: key.to_string(),
                                    source: Box::new(e),
                                })?;
                        normalized.insert(key.clone(), checked);
                    }
                    Ok(Value::Array(normalized))
                }
                other => Err(self.mismatch(other)),
            },
            Shape::Object(identity) => match value {
                Value::Object(instance) if instance.identity() == *identity => Ok(value.clone()),
                Value::Object(_) => Err(SchemaError::Constraint {
                    rule: format!("instance of `{}`", identity.name()),
                    value: value.clone(),
                }),
                other => Err(self.mismatch(other)),
            },
        }
    }

    fn mismatch(&self, value: &Value) -> SchemaError {
        SchemaError::Type(TypeMismatch::new(self.shape.tag(), value.tag()))
    }
}
