//! # Full-Match String Constraints
//!
//! `Pattern` wraps regular-expression text compiled to match entire
//! strings: the text is anchored as `\A(?:text)\z` before compilation, so
//! `[0-9]+` accepts `"42"` but not `"a42"`. Identity follows the text —
//! two patterns are equal, and compatible, iff their texts are equal.

use std::fmt;

use regex::Regex;

use crate::error::SchemaError;

/// Pattern text that accepts any string, including newlines.
const ANY_TEXT: &str = "(?s).*";

/// A regular-expression constraint over whole strings.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    // None means unconstrained: the match-anything pattern needs no
    // automaton, and building it this way keeps `any()` infallible.
    regex: Option<Regex>,
}

impl Pattern {
    /// Compiles pattern text into a full-match constraint.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidPattern`] when the text does not compile.
    pub fn new(text: impl Into<String>) -> Result<Self, SchemaError> {
        let text = text.into();
        let anchored = format!(r"\A(?:{text})\z");
        let regex = Regex::new(&anchored).map_err(|e| SchemaError::InvalidPattern {
            pattern: text.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            text,
            regex: Some(regex),
        })
    }

    /// The constraint that accepts any string, including newlines.
    ///
    /// This is the constraint a plain string descriptor carries.
    pub fn any() -> Self {
        Self {
            text: ANY_TEXT.to_string(),
            regex: None,
        }
    }

    /// The pattern text as given, without the full-match anchoring.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the whole candidate matches.
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(candidate),
            None => true,
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
