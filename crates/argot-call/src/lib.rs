//! # argot-call — Call Validation
//!
//! Wraps host callables in their declared contracts. A
//! [`SignatureResolver`] supplies, per callable name, the argument
//! collection and return descriptor; [`validated`] enforces both around a
//! single invocation: positional arguments are named after the declared
//! keys, bound and normalized before the body runs, and the result is
//! validated before it escapes.
//!
//! [`SignatureRegistry`] is the bundled resolver — an in-memory name-to-
//! signature store. Hosts with richer signature sources (reflection,
//! generated metadata) implement [`SignatureResolver`] themselves; the
//! engine never asks where contracts come from.
//!
//! ## Crate Policy
//!
//! - Depends on `argot-core` and `argot-schema` internally, nothing else.
//! - No `unsafe` code; no `panic!()` or `.unwrap()` outside tests.
//! - Call failures always name the callable and keep the underlying
//!   rejection as the error source.

pub mod resolver;
pub mod validated;

pub use resolver::{ResolveError, SignatureRegistry, SignatureResolver};
pub use validated::{validated, CallError};
