//! # Argument Binding
//!
//! `Arguments::bind` checks a concrete input map against a collection and,
//! on success, yields the normalized argument set: every declared key
//! present, every value validated, every absent optional filled from its
//! default. Binding is pure — no clocks, no I/O, no hidden state — and
//! fail-fast: the first rejection wins and nothing partial escapes.
//!
//! ## Result Ordering
//!
//! The bound map lists input keys first, in input order, then defaulted
//! optional keys in declaration order. Re-binding a bound map reproduces
//! it exactly.

use argot_core::{Array, ArrayKey, Cast, Value};

use crate::error::SchemaError;
use crate::parameter::Parameter;
use crate::parameters::Parameters;

/// A validated, normalized argument set.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    parameters: Parameters,
    values: Array,
}

impl Arguments {
    /// Binds an input map against a collection.
    ///
    /// The pipeline, in order, each stage fail-fast:
    ///
    /// 1. every input key must be declared (string-keyed and known);
    /// 2. every required key must be present;
    /// 3. each present entry is validated by its descriptor, rejections
    ///    wrapped with the key context;
    /// 4. each absent optional entry is filled from its default.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownKey`], [`SchemaError::MissingRequired`], or a
    /// key-wrapped validation error, in that order of discovery.
    pub fn bind(parameters: &Parameters, input: &Array) -> Result<Self, SchemaError> {
        for (key, _) in input {
            match key {
                ArrayKey::Str(name) if parameters.contains(name) => {}
                other => {
                    return Err(SchemaError::UnknownKey {
                        key: other.to_string(),
                    })
                }
            }
        }

        for name in parameters.required_keys() {
            if !input.contains_key(name) {
                return Err(SchemaError::MissingRequired {
                    key: name.to_string(),
                });
            }
        }

        let mut values = Array::new();
        for (key, value) in input {
            let ArrayKey::Str(name) = key else {
                // integer keys were rejected above
                continue;
            };
            let Some(parameter) = parameters.get(name) else {
                // undeclared keys were rejected above
                continue;
            };
            let validated = parameter
                .validate(value)
                .map_err(|e| SchemaError::argument(name.clone(), e))?;
            values.insert(name.clone(), validated);
        }

        for (name, parameter) in parameters {
            if values.contains_key(name) {
                continue;
            }
            if let Some(default) = parameter.default() {
                values.insert(name.clone(), default.clone());
            }
        }

        Ok(Self {
            parameters: parameters.clone(),
            values,
        })
    }

    /// The collection this set was bound against.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The normalized argument map.
    pub fn as_array(&self) -> &Array {
        &self.values
    }

    /// Consumes the set, yielding the normalized argument map.
    pub fn into_array(self) -> Array {
        self.values
    }

    /// The bound value under `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Typed access to a required argument.
    ///
    /// # Errors
    ///
    /// [`SchemaError::KeyNotFound`] when `name` is not one of the
    /// collection's required keys.
    pub fn required(&self, name: &str) -> Result<Cast, SchemaError> {
        if !self.parameters.required_keys().contains(&name) {
            return Err(SchemaError::KeyNotFound {
                key: name.to_string(),
            });
        }
        self.cast_of(name)
    }

    /// Typed access to an optional argument.
    ///
    /// After binding, optional arguments always hold a value — their
    /// defaults were filled in — so this fails only on misaddressed names.
    ///
    /// # Errors
    ///
    /// [`SchemaError::KeyNotFound`] when `name` is not one of the
    /// collection's optional keys.
    pub fn optional(&self, name: &str) -> Result<Cast, SchemaError> {
        if !self.parameters.optional_keys().contains(&name) {
            return Err(SchemaError::KeyNotFound {
                key: name.to_string(),
            });
        }
        self.cast_of(name)
    }

    fn cast_of(&self, name: &str) -> Result<Cast, SchemaError> {
        self.values
            .get(name)
            .cloned()
            .map(Cast::new)
            .ok_or_else(|| SchemaError::KeyNotFound {
                key: name.to_string(),
            })
    }
}

impl Parameters {
    /// Binds an input map against this collection. See [`Arguments::bind`].
    pub fn bind(&self, input: &Array) -> Result<Arguments, SchemaError> {
        Arguments::bind(self, input)
    }
}

/// Validates one named value against a descriptor.
///
/// Any rejection comes back wrapped with the argument name, so callers
/// checking loose values get the same `[name]: ...` context the binder
/// produces.
///
/// # Errors
///
/// The descriptor's rejection, wrapped as [`SchemaError::Argument`].
pub fn assert_named_argument(
    name: &str,
    parameter: &Parameter,
    value: &Value,
) -> Result<Value, SchemaError> {
    parameter
        .validate(value)
        .map_err(|e| SchemaError::argument(name, e))
}
