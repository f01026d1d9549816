//! # argot-core — Value Model for the argot Validation Engine
//!
//! This crate is the bedrock of the argot workspace. It defines the closed
//! runtime value universe and the primitives every other crate speaks:
//! values, ordered entry arrays, host-object instances, canonical type tags,
//! and the typed cast wrapper. Every other crate in the workspace depends on
//! `argot-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed value sum.** [`Value`] has exactly seven variants and
//!    [`TypeTag`] exactly seven tags; the mapping between them is total.
//!    No dynamic typing escape hatches.
//!
//! 2. **Strict keys, strict numbers.** [`Array`] keys are integers or
//!    strings and never coerce into each other; `Int` and `Float` values
//!    never interchange. What you insert is what validation sees.
//!
//! 3. **Order is data.** [`Array`] preserves insertion order and keeps an
//!    existing key's position on re-insert. The binder's result-ordering
//!    contract is built on these guarantees.
//!
//! 4. **Opaque objects, checkable identity.** [`Instance`] wraps host data
//!    behind an `Arc` and exposes only its [`TypeIdentity`]; the engine
//!    compares identities and never looks inside.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `argot-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; `Serialize`/`Deserialize`
//!   where the type is wire-representable (host instances are not).

pub mod cast;
pub mod error;
pub mod instance;
pub mod tag;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use cast::Cast;
pub use error::TypeMismatch;
pub use instance::{Instance, TypeIdentity};
pub use tag::{ParseTypeTagError, TypeTag, TYPE_TAG_COUNT};
pub use value::{Array, ArrayKey, Value};
