//! # Named Parameter Collections
//!
//! `Parameters` maps unique names to descriptors, preserving declaration
//! order. Whether an entry is required or optional is never stored — it is
//! derived from the descriptor itself: optional iff a default is present.
//! The two builder methods enforce that derivation at the boundary, so a
//! collection can never claim one classification and exhibit the other.

use indexmap::IndexMap;

use crate::error::SchemaError;
use crate::parameter::Parameter;

/// Ordered, unique-keyed collection of named descriptors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameters {
    entries: IndexMap<String, Parameter>,
}

impl Parameters {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with a required entry appended.
    ///
    /// An existing name is replaced in place, keeping its position.
    ///
    /// # Errors
    ///
    /// [`SchemaError::DefaultForbidden`] when the descriptor carries a
    /// default — such an entry would be classified optional.
    pub fn with_required(
        mut self,
        name: impl Into<String>,
        parameter: Parameter,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if parameter.default().is_some() {
            return Err(SchemaError::DefaultForbidden { key: name });
        }
        self.entries.insert(name, parameter);
        Ok(self)
    }

    /// Returns a copy with an optional entry appended.
    ///
    /// An existing name is replaced in place, keeping its position.
    ///
    /// # Errors
    ///
    /// [`SchemaError::DefaultRequired`] when the descriptor carries no
    /// default — there would be nothing to fill the entry with.
    pub fn with_optional(
        mut self,
        name: impl Into<String>,
        parameter: Parameter,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if parameter.default().is_none() {
            return Err(SchemaError::DefaultRequired { key: name });
        }
        self.entries.insert(name, parameter);
        Ok(self)
    }

    /// Whether a single name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether every given name is declared.
    pub fn has<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> bool {
        names.into_iter().all(|name| self.contains(name))
    }

    /// The descriptor under `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection declares nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names of entries without defaults, in declaration order.
    pub fn required_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, p)| p.default().is_none())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Names of entries with defaults, in declaration order.
    pub fn optional_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, p)| p.default().is_some())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Parameter> {
        self.entries.iter()
    }

    /// Selects a subset of entries, in *request* order.
    ///
    /// Descriptors are carried over unchanged, so each keeps its derived
    /// classification.
    ///
    /// # Errors
    ///
    /// [`SchemaError::KeyNotFound`] for the first requested name that is
    /// not declared.
    pub fn select<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Parameters, SchemaError> {
        let mut entries = IndexMap::new();
        for name in names {
            let parameter = self.entries.get(name).ok_or_else(|| SchemaError::KeyNotFound {
                key: name.to_string(),
            })?;
            entries.insert(name.to_string(), parameter.clone());
        }
        Ok(Self { entries })
    }
}

impl FromIterator<(String, Parameter)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Parameter)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a Parameter);
    type IntoIter = indexmap::map::Iter<'a, String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Parameter);
    type IntoIter = indexmap::map::IntoIter<String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
