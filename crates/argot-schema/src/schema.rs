//! # Schema Descriptions
//!
//! Descriptors can describe themselves as JSON: shape name, description,
//! default, plus the per-shape extras (pattern text, nested entries, map
//! key/value descriptors, host class name). Collections emit an ordered
//! entry map with each member's derived `required` flag. The output is a
//! description of the contract, not a validator format.

use serde_json::{json, Map, Value as Json};

use crate::parameter::{Parameter, Shape};
use crate::parameters::Parameters;

impl Parameter {
    /// Structured self-description.
    ///
    /// Every shape carries `type`, `description`, and `default` (JSON
    /// `null` when absent); strings add `regex`, arrays add `parameters`,
    /// maps add `key` and `value`, objects add `class`.
    pub fn schema(&self) -> Json {
        let mut out = Map::new();
        out.insert("type".to_string(), json!(self.shape().name()));
        out.insert("description".to_string(), json!(self.description()));
        out.insert(
            "default".to_string(),
            self.default().map_or(Json::Null, |v| v.to_json()),
        );
        match self.shape() {
            Shape::Null | Shape::Bool | Shape::Int | Shape::Float => {}
            Shape::String(pattern) => {
                out.insert("regex".to_string(), json!(pattern.as_str()));
            }
            Shape::Array(parameters) => {
                out.insert("parameters".to_string(), parameters.schema());
            }
            Shape::Map { key, value } => {
                out.insert("key".to_string(), key.schema());
                out.insert("value".to_string(), value.schema());
            }
            Shape::Object(identity) => {
                out.insert("class".to_string(), json!(identity.name()));
            }
        }
        Json::Object(out)
    }
}

impl Parameters {
    /// Ordered map of every entry's description, each carrying its derived
    /// `required` flag.
    pub fn schema(&self) -> Json {
        let mut out = Map::new();
        for (name, parameter) in self {
            let mut entry = Map::new();
            entry.insert("required".to_string(), json!(parameter.default().is_none()));
            if let Json::Object(fields) = parameter.schema() {
                entry.extend(fields);
            }
            out.insert(name.clone(), Json::Object(entry));
        }
        Json::Object(out)
    }
}
