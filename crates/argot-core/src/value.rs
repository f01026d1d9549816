//! # Runtime Value Universe
//!
//! Defines `Value`, the closed sum of every runtime value the engine can
//! process, and `Array`, the ordered entry map backing both lists and named
//! maps. Keys are integers or strings and are never coerced into each other:
//! `Int(1)` and `Str("1")` are distinct keys.
//!
//! ## Ordering
//!
//! `Array` preserves insertion order (it is backed by `IndexMap`), and
//! re-inserting an existing key keeps its original position. The binder
//! relies on both properties for its result-ordering contract.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexMap};

use crate::instance::Instance;
use crate::tag::TypeTag;

/// Key of an [`Array`] entry: integer or string, never coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayKey {
    /// Integer key, as in a list position or a numeric index.
    Int(i64),
    /// String key, as in a named map entry.
    Str(String),
}

// String keys hash exactly like `str`, so `&str` lookups can share the
// table's hash (see the `Equivalent` impl below).
impl Hash for ArrayKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ArrayKey::Int(i) => i.hash(state),
            ArrayKey::Str(s) => s.as_str().hash(state),
        }
    }
}

impl Equivalent<ArrayKey> for str {
    fn equivalent(&self, key: &ArrayKey) -> bool {
        matches!(key, ArrayKey::Str(s) if s == self)
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{i}"),
            ArrayKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(key: i64) -> Self {
        ArrayKey::Int(key)
    }
}

impl From<&str> for ArrayKey {
    fn from(key: &str) -> Self {
        ArrayKey::Str(key.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(key: String) -> Self {
        ArrayKey::Str(key)
    }
}

/// Ordered entry map with int-or-string keys.
///
/// A list is an array whose keys are exactly `0..len` in order; a named map
/// has string keys. Mixed and sparse keying is permitted — the distinction
/// only matters to consumers such as [`Array::to_json`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    entries: IndexMap<ArrayKey, Value>,
}

impl Array {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the previous value under that key.
    ///
    /// An existing key keeps its position; a new key appends.
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Appends a value under the next integer key.
    ///
    /// The next key is one past the highest integer key present, or `0`
    /// for an array with no integer keys. At the top of the key range the
    /// key saturates to `i64::MAX` and the push replaces that entry.
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self
            .entries
            .keys()
            .filter_map(|k| match k {
                ArrayKey::Int(i) => Some(*i),
                ArrayKey::Str(_) => None,
            })
            .max()
            .map_or(0, |highest| highest.saturating_add(1));
        self.entries.insert(ArrayKey::Int(next), value.into());
    }

    /// Looks up a string-keyed entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Looks up an integer-keyed entry.
    pub fn get_int(&self, key: i64) -> Option<&Value> {
        self.entries.get(&ArrayKey::Int(key))
    }

    /// Whether a string-keyed entry exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, ArrayKey, Value> {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey> {
        self.entries.keys()
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Whether the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, k)| matches!(k, ArrayKey::Int(n) if *n == i as i64))
    }

    /// Converts to a `serde_json` value: lists become JSON arrays, anything
    /// else becomes a JSON object with stringified keys.
    pub fn to_json(&self) -> serde_json::Value {
        if self.is_list() {
            serde_json::Value::Array(self.values().map(Value::to_json).collect())
        } else {
            let mut map = serde_json::Map::with_capacity(self.len());
            for (key, value) in self {
                map.insert(key.to_string(), value.to_json());
            }
            serde_json::Value::Object(map)
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<ArrayKey>, V: Into<Value>> FromIterator<(K, V)> for Array {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Vec<Value>> for Array {
    /// Builds a list: keys `0..len` in order.
    fn from(values: Vec<Value>) -> Self {
        let mut array = Array::new();
        for value in values {
            array.push(value);
        }
        array
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a ArrayKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ArrayKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Array {
    type Item = (ArrayKey, Value);
    type IntoIter = indexmap::map::IntoIter<ArrayKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A runtime value processed by the engine.
///
/// The sum is closed: these seven variants are the whole universe, and
/// [`Value::tag`] maps each onto its canonical [`TypeTag`]. There is no
/// numeric coercion — `Int(2)` and `Float(2.0)` are different values with
/// different tags.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// IEEE-754 double. `NaN` compares unequal to itself.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered entry map.
    Array(Array),
    /// Opaque host object.
    Object(Instance),
}

impl Value {
    /// The canonical tag of this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// Whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The string payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The array payload, if this is an `Array`.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The instance payload, if this is an `Object`.
    pub fn as_object(&self) -> Option<&Instance> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Converts to a `serde_json` value for description output.
    ///
    /// Instances render as their type name; a non-finite float renders as
    /// JSON null (JSON has no representation for it).
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => (*b).into(),
            Value::Int(i) => (*i).into(),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => s.clone().into(),
            Value::Array(a) => a.to_json(),
            Value::Object(o) => serde_json::Value::String(o.type_name().to_string()),
        }
    }
}

impl fmt::Display for Value {
    /// Compact human-readable rendering for error messages.
    ///
    /// Floats keep their decimal point (`2.0`, not `2`) so they stay
    /// distinguishable from integers; strings are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(a) => write!(f, "{a}"),
            Value::Object(o) => write!(f, "<{}>", o.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Value::Object(value)
    }
}
