//! # Signature Resolution
//!
//! Where argument contracts come from is the host's business: a reflection
//! layer, generated code, or plain registration. The engine only needs the
//! narrow [`SignatureResolver`] seam — given a callable's name, produce the
//! collection its arguments must bind against and the descriptor its
//! return value must satisfy. [`SignatureRegistry`] is the in-memory
//! implementation used by hosts without reflection and by tests.

use indexmap::IndexMap;
use thiserror::Error;

use argot_schema::{Parameter, Parameters};

/// A callable signature could not be turned into descriptors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// No signature is known under the callable's name.
    #[error("unknown callable `{callable}`")]
    UnknownCallable {
        /// The unresolvable name.
        callable: String,
    },

    /// A declared parameter carries no type the resolver can describe.
    #[error("`{callable}` parameter `{parameter}` declares no type")]
    MissingType {
        /// The callable being resolved.
        callable: String,
        /// The untyped parameter.
        parameter: String,
    },

    /// A declared parameter's type has no descriptor equivalent.
    #[error("`{callable}` parameter `{parameter}` has unsupported type kind `{kind}`")]
    UnsupportedType {
        /// The callable being resolved.
        callable: String,
        /// The offending parameter.
        parameter: String,
        /// The host-side kind that cannot be described, such as a union.
        kind: String,
    },
}

/// Source of argument and return contracts for named callables.
pub trait SignatureResolver {
    /// The collection a call's arguments must bind against.
    ///
    /// # Errors
    ///
    /// [`ResolveError`] when the callable is unknown or its signature
    /// cannot be expressed as descriptors.
    fn arguments_of(&self, callable: &str) -> Result<Parameters, ResolveError>;

    /// The descriptor a call's return value must satisfy.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SignatureResolver::arguments_of`].
    fn return_of(&self, callable: &str) -> Result<Parameter, ResolveError>;
}

#[derive(Debug, Clone, PartialEq)]
struct Signature {
    parameters: Parameters,
    returns: Parameter,
}

/// In-memory signature store.
///
/// Registration order is preserved; re-registering a name replaces its
/// signature in place.
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    signatures: IndexMap<String, Signature>,
}

impl SignatureRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a callable's signature.
    pub fn register(
        &mut self,
        callable: impl Into<String>,
        parameters: Parameters,
        returns: Parameter,
    ) {
        self.signatures
            .insert(callable.into(), Signature { parameters, returns });
    }

    /// Whether a signature is registered under `callable`.
    pub fn contains(&self, callable: &str) -> bool {
        self.signatures.contains_key(callable)
    }

    /// Registered callable names, in registration order.
    pub fn callables(&self) -> impl Iterator<Item = &str> {
        self.signatures.keys().map(String::as_str)
    }
}

impl SignatureResolver for SignatureRegistry {
    fn arguments_of(&self, callable: &str) -> Result<Parameters, ResolveError> {
        self.signatures
            .get(callable)
            .map(|s| s.parameters.clone())
            .ok_or_else(|| ResolveError::UnknownCallable {
                callable: callable.to_string(),
            })
    }

    fn return_of(&self, callable: &str) -> Result<Parameter, ResolveError> {
        self.signatures
            .get(callable)
            .map(|s| s.returns.clone())
            .ok_or_else(|| ResolveError::UnknownCallable {
                callable: callable.to_string(),
            })
    }
}
