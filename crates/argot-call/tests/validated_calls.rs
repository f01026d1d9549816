//! Integration test: validated calls through a host-style resolver.
//!
//! Drives `validated()` the way an embedding host would — one resolver
//! serving several callables, including signatures the resolver cannot
//! express — and checks the full error texture at the call boundary.

use argot_call::{validated, CallError, ResolveError, SignatureRegistry, SignatureResolver};
use argot_core::{Array, Value};
use argot_schema::{Arguments, Parameter, Parameters, Pattern};

/// Resolver with a fixed roster: registry-backed signatures plus two
/// names whose host-side declarations cannot be described.
struct HostResolver {
    registry: SignatureRegistry,
}

impl HostResolver {
    fn new() -> Self {
        let mut registry = SignatureRegistry::new();

        // greet(name: /[A-Z][a-z]+/, punctuation = "!") -> string
        let greet = Parameters::new()
            .with_required(
                "name",
                Parameter::string_matching(Pattern::new("[A-Z][a-z]+").unwrap()),
            )
            .unwrap()
            .with_optional(
                "punctuation",
                Parameter::string().with_default("!").unwrap(),
            )
            .unwrap();
        registry.register("greet", greet, Parameter::string());

        // tally(scores: map<string, int>) -> int
        let tally = Parameters::new()
            .with_required(
                "scores",
                Parameter::map(Parameter::string(), Parameter::int()),
            )
            .unwrap();
        registry.register("tally", tally, Parameter::int());

        Self { registry }
    }
}

impl SignatureResolver for HostResolver {
    fn arguments_of(&self, callable: &str) -> Result<Parameters, ResolveError> {
        match callable {
            "untyped" => Err(ResolveError::MissingType {
                callable: callable.to_string(),
                parameter: "raw".to_string(),
            }),
            "overloaded" => Err(ResolveError::UnsupportedType {
                callable: callable.to_string(),
                parameter: "input".to_string(),
                kind: "union".to_string(),
            }),
            other => self.registry.arguments_of(other),
        }
    }

    fn return_of(&self, callable: &str) -> Result<Parameter, ResolveError> {
        self.registry.return_of(callable)
    }
}

fn greet(arguments: &Arguments) -> Value {
    let name = arguments.required("name").unwrap();
    let punctuation = arguments.optional("punctuation").unwrap();
    Value::from(format!(
        "Hello, {}{}",
        name.as_string().unwrap(),
        punctuation.as_string().unwrap()
    ))
}

fn tally(arguments: &Arguments) -> Value {
    let scores = arguments.required("scores").unwrap();
    let total: i64 = scores
        .as_array()
        .unwrap()
        .values()
        .filter_map(Value::as_int)
        .sum();
    Value::from(total)
}

#[test]
fn test_greet_fills_the_default_punctuation() {
    let resolver = HostResolver::new();
    let result = validated(&resolver, "greet", &[Value::from("Ada")], greet).unwrap();
    assert_eq!(result, Value::from("Hello, Ada!"));
}

#[test]
fn test_greet_with_both_positions() {
    let resolver = HostResolver::new();
    let args = [Value::from("Ada"), Value::from("?")];
    let result = validated(&resolver, "greet", &args, greet).unwrap();
    assert_eq!(result, Value::from("Hello, Ada?"));
}

#[test]
fn test_constraint_failure_at_the_call_boundary() {
    let resolver = HostResolver::new();
    let err = validated(&resolver, "greet", &[Value::from("ada")], greet).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`greet` argument: [name]: \"ada\" does not satisfy regex `[A-Z][a-z]+`"
    );
}

#[test]
fn test_map_argument_flows_through_whole() {
    let resolver = HostResolver::new();
    let mut scores = Array::new();
    scores.insert("alice", 3);
    scores.insert("bob", 4);
    let result = validated(&resolver, "tally", &[Value::from(scores)], tally).unwrap();
    assert_eq!(result, Value::from(7));
}

#[test]
fn test_map_entry_rejection_is_path_wrapped() {
    let resolver = HostResolver::new();
    let mut scores = Array::new();
    scores.insert("alice", 3);
    scores.insert("bob", "four");
    let err = validated(&resolver, "tally", &[Value::from(scores)], tally).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`tally` argument: [scores]: map value [bob]: expected type `int`, found `string`"
    );
}

#[test]
fn test_undescribable_signatures_surface_as_resolve_errors() {
    let resolver = HostResolver::new();

    let err = validated(&resolver, "untyped", &[], |_| Value::Null).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`untyped` signature: `untyped` parameter `raw` declares no type"
    );
    assert!(matches!(
        err,
        CallError::Resolve {
            source: ResolveError::MissingType { .. },
            ..
        }
    ));

    let err = validated(&resolver, "overloaded", &[], |_| Value::Null).unwrap_err();
    assert!(matches!(
        err,
        CallError::Resolve {
            source: ResolveError::UnsupportedType { .. },
            ..
        }
    ));
}

#[test]
fn test_trait_object_resolver_works() {
    let resolver = HostResolver::new();
    let dynamic: &dyn SignatureResolver = &resolver;
    let result = validated(dynamic, "greet", &[Value::from("Bob")], greet).unwrap();
    assert_eq!(result, Value::from("Hello, Bob!"));
}
