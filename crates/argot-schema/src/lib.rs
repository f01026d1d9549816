//! # argot-schema — Descriptors & the Binding Engine
//!
//! Declarative value contracts for the argot validation engine: callers
//! build [`Parameter`] descriptors, compose them into ordered [`Parameters`]
//! collections, and bind concrete input maps against them.
//!
//! ## Descriptors (`parameter`, `pattern`)
//!
//! A [`Parameter`] pairs a structural [`Shape`] (null, bool, int, float,
//! regex-constrained string, nested array, keyed map, host object) with an
//! optional default and a description. Defaults must satisfy their own
//! descriptor — that is checked at construction, and re-checked whenever a
//! constraint changes.
//!
//! ## Binding (`arguments`)
//!
//! [`Arguments::bind`] validates an input map in one fail-fast pass:
//! unknown keys, then missing required keys, then per-key validation with
//! `[key]: ...` context, then default filling. The normalized result
//! preserves input order and appends defaulted entries in declaration
//! order; binding a bound map again reproduces it.
//!
//! ## Compatibility and Description (`compat`, `schema`)
//!
//! [`Parameter::assert_compatible`] checks exact structural equivalence
//! (never subtyping); [`Parameter::schema`] emits a JSON self-description.
//!
//! ## Crate Policy
//!
//! - Depends only on `argot-core` internally.
//! - No `unsafe` code; no `panic!()` or `.unwrap()` outside tests.
//! - Validation is a trust boundary: rejected values produce structured
//!   errors carrying the exact kind and key path, never bare strings.

pub mod arguments;
pub mod compat;
pub mod error;
pub mod parameter;
pub mod parameters;
pub mod pattern;
pub mod schema;

pub use arguments::{assert_named_argument, Arguments};
pub use error::SchemaError;
pub use parameter::{Parameter, Shape};
pub use parameters::Parameters;
pub use pattern::Pattern;
