//! # Validated Calls
//!
//! `validated()` wraps one invocation of a host callable in its declared
//! contract: arguments are checked before the callable runs, the return
//! value after. Positional arguments are matched to the collection's
//! declared names in order, so hosts with positional calling conventions
//! get named binding for free. Every failure names the callable and keeps
//! the underlying error intact.

use thiserror::Error;

use argot_core::{Array, Value};
use argot_schema::{Arguments, SchemaError};

use crate::resolver::{ResolveError, SignatureResolver};

/// A call-scoped failure: what went wrong, and around which callable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// The callable's signature could not be resolved.
    #[error("`{callable}` signature: {source}")]
    Resolve {
        /// The callable being invoked.
        callable: String,
        /// The resolver's failure.
        source: ResolveError,
    },

    /// The arguments were rejected before the callable ran.
    #[error("`{callable}` argument: {source}")]
    Parameter {
        /// The callable being invoked.
        callable: String,
        /// The binder's rejection.
        source: SchemaError,
    },

    /// The callable ran, but its return value was rejected.
    #[error("`{callable}` return: {source}")]
    Return {
        /// The callable that produced the value.
        callable: String,
        /// The descriptor's rejection.
        source: SchemaError,
    },
}

/// Invokes `callable` through `f` with both sides of its contract
/// enforced.
///
/// The sequence:
///
/// 1. resolve the argument collection and return descriptor;
/// 2. name the positional `args` after the collection's keys in
///    declaration order — a surplus position is an unknown key, named by
///    its index;
/// 3. bind (validating and filling defaults) and hand the normalized
///    [`Arguments`] to `f`;
/// 4. validate `f`'s result against the return descriptor and give back
///    the normalized value.
///
/// The callable body runs only after its arguments passed, and its result
/// escapes only after it passed.
///
/// # Errors
///
/// [`CallError::Resolve`], [`CallError::Parameter`], or
/// [`CallError::Return`], each naming the callable and carrying the
/// underlying rejection as its source.
pub fn validated<R, F>(
    resolver: &R,
    callable: &str,
    args: &[Value],
    f: F,
) -> Result<Value, CallError>
where
    R: SignatureResolver + ?Sized,
    F: FnOnce(&Arguments) -> Value,
{
    let resolve = |source| CallError::Resolve {
        callable: callable.to_string(),
        source,
    };
    let parameters = resolver.arguments_of(callable).map_err(&resolve)?;
    let returns = resolver.return_of(callable).map_err(&resolve)?;

    let names: Vec<&str> = parameters.keys().collect();
    let mut input = Array::new();
    for (position, value) in args.iter().enumerate() {
        let Some(name) = names.get(position) else {
            return Err(CallError::Parameter {
                callable: callable.to_string(),
                source: SchemaError::UnknownKey {
                    key: position.to_string(),
                },
            });
        };
        input.insert(*name, value.clone());
    }

    let arguments = Arguments::bind(&parameters, &input).map_err(|source| CallError::Parameter {
        callable: callable.to_string(),
        source,
    })?;

    let result = f(&arguments);

    returns.validate(&result).map_err(|source| CallError::Return {
        callable: callable.to_string(),
        source,
    })
}
