//! # Structural Compatibility
//!
//! Two descriptors are compatible iff they accept structurally identical
//! value spaces: same shape, same pattern text, same host type, same
//! nested key set with pairwise-compatible descriptors. This is exact
//! equivalence, not subtyping — `[0-9]+` is neither above nor below
//! `[0-9]*` here, they are simply incompatible. Descriptions, defaults,
//! and the required/optional split play no part.

use crate::error::SchemaError;
use crate::parameter::{Parameter, Shape};
use crate::parameters::Parameters;

impl Parameter {
    /// Asserts exact structural equivalence with another descriptor.
    ///
    /// The relation is symmetric: whenever `a.assert_compatible(&b)`
    /// passes, so does `b.assert_compatible(&a)`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Incompatible`] naming the first aspect that
    /// disagrees; nested array mismatches come back wrapped with their
    /// key context.
    pub fn assert_compatible(&self, other: &Parameter) -> Result<(), SchemaError> {
        match (self.shape(), other.shape()) {
            (Shape::Null, Shape::Null)
            | (Shape::Bool, Shape::Bool)
            | (Shape::Int, Shape::Int)
            | (Shape::Float, Shape::Float) => Ok(()),
            (Shape::String(a), Shape::String(b)) => {
                if a == b {
                    Ok(())
                } else {
                    Err(SchemaError::Incompatible {
                        reason: format!(
                            "regex `{}` is not equal to regex `{}`",
                            a.as_str(),
                            b.as_str()
                        ),
                    })
                }
            }
            (Shape::Object(a), Shape::Object(b)) => {
                if a == b {
                    Ok(())
                } else {
                    Err(SchemaError::Incompatible {
                        reason: format!("class `{}` is not class `{}`", a.name(), b.name()),
                    })
                }
            }
            (Shape::Array(a), Shape::Array(b)) => a.assert_compatible(b),
            (
                Shape::Map { key: a_key, value: a_value },
                Shape::Map { key: b_key, value: b_value },
            ) => {
                a_key.assert_compatible(b_key)?;
                a_value.assert_compatible(b_value)
            }
            (a, b) => Err(SchemaError::Incompatible {
                reason: format!("shape `{}` is not shape `{}`", a.name(), b.name()),
            }),
        }
    }
}

impl Parameters {
    /// Asserts that both collections declare the same key set with
    /// pairwise structurally equivalent descriptors.
    ///
    /// Declaration order and the required/optional split do not
    /// participate; only the key set and the descriptors do.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Incompatible`] for a key missing on either side;
    /// per-key descriptor mismatches wrapped as [`SchemaError::Argument`].
    pub fn assert_compatible(&self, other: &Parameters) -> Result<(), SchemaError> {
        for (name, parameter) in self {
            let Some(counterpart) = other.get(name) else {
                return Err(SchemaError::Incompatible {
                    reason: format!("key `{name}` is not declared by both collections"),
                });
            };
            parameter
                .assert_compatible(counterpart)
                .map_err(|e| SchemaError::argument(name.clone(), e))?;
        }
        for (name, _) in other {
            if self.get(name).is_none() {
                return Err(SchemaError::Incompatible {
                    reason: format!("key `{name}` is not declared by both collections"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use argot_core::Value;

    struct Widget;
    struct Gadget;

    fn assert_both_ways(a: &Parameter, b: &Parameter, expect_ok: bool) {
        assert_eq!(a.assert_compatible(b).is_ok(), expect_ok, "forward");
        assert_eq!(b.assert_compatible(a).is_ok(), expect_ok, "backward");
    }

    // ---- scalars ----

    #[test]
    fn test_same_scalar_shapes_are_compatible() {
        assert_both_ways(&Parameter::null(), &Parameter::null(), true);
        assert_both_ways(&Parameter::bool(), &Parameter::bool(), true);
        assert_both_ways(&Parameter::int(), &Parameter::int(), true);
        assert_both_ways(&Parameter::float(), &Parameter::float(), true);
    }

    #[test]
    fn test_different_shapes_are_incompatible() {
        assert_both_ways(&Parameter::int(), &Parameter::float(), false);
        assert_both_ways(&Parameter::string(), &Parameter::null(), false);
        let err = Parameter::int()
            .assert_compatible(&Parameter::float())
            .unwrap_err();
        assert_eq!(err.to_string(), "incompatible: shape `int` is not shape `float`");
    }

    #[test]
    fn test_array_and_map_shapes_differ() {
        let array = Parameter::array(Parameters::new());
        let map = Parameter::map(Parameter::string(), Parameter::int());
        assert_both_ways(&array, &map, false);
    }

    // ---- constraints ----

    #[test]
    fn test_string_compatibility_is_pattern_text_equality() {
        let a = Parameter::string_matching(Pattern::new("[0-9]+").unwrap());
        let b = Parameter::string_matching(Pattern::new("[0-9]+").unwrap());
        let c = Parameter::string_matching(Pattern::new("[0-9]*").unwrap());
        assert_both_ways(&a, &b, true);
        assert_both_ways(&a, &c, false);
        assert_both_ways(&Parameter::string(), &Parameter::string(), true);
        assert_both_ways(&Parameter::string(), &a, false);
    }

    #[test]
    fn test_object_compatibility_is_type_identity() {
        let a = Parameter::object::<Widget>();
        let b = Parameter::object::<Widget>();
        let c = Parameter::object::<Gadget>();
        assert_both_ways(&a, &b, true);
        assert_both_ways(&a, &c, false);
    }

    // ---- defaults and descriptions are invisible ----

    #[test]
    fn test_defaults_and_descriptions_do_not_participate() {
        let bare = Parameter::int();
        let dressed = Parameter::int()
            .with_description("a count")
            .with_default(9)
            .unwrap();
        assert_both_ways(&bare, &dressed, true);
    }

    #[test]
    fn test_classification_does_not_participate() {
        let a = Parameters::new()
            .with_required("n", Parameter::int())
            .unwrap();
        let b = Parameters::new()
            .with_optional("n", Parameter::int().with_default(0).unwrap())
            .unwrap();
        assert!(a.assert_compatible(&b).is_ok());
        assert!(b.assert_compatible(&a).is_ok());
    }

    // ---- collections ----

    #[test]
    fn test_collections_must_share_the_key_set() {
        let a = Parameters::new()
            .with_required("x", Parameter::int())
            .unwrap();
        let b = Parameters::new()
            .with_required("x", Parameter::int())
            .unwrap()
            .with_required("y", Parameter::int())
            .unwrap();
        let err = a.assert_compatible(&b).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incompatible: key `y` is not declared by both collections"
        );
        assert!(b.assert_compatible(&a).is_err());
    }

    #[test]
    fn test_collection_order_does_not_participate() {
        let a = Parameters::new()
            .with_required("x", Parameter::int())
            .unwrap()
            .with_required("y", Parameter::string())
            .unwrap();
        let b = Parameters::new()
            .with_required("y", Parameter::string())
            .unwrap()
            .with_required("x", Parameter::int())
            .unwrap();
        assert!(a.assert_compatible(&b).is_ok());
    }

    #[test]
    fn test_nested_mismatch_is_key_wrapped() {
        let digits = || Parameter::string_matching(Pattern::new("[0-9]+").unwrap());
        let inner_a = Parameters::new().with_required("id", digits()).unwrap();
        let inner_b = Parameters::new()
            .with_required("id", Parameter::string())
            .unwrap();
        let a = Parameters::new()
            .with_required("nest", Parameter::array(inner_a))
            .unwrap();
        let b = Parameters::new()
            .with_required("nest", Parameter::array(inner_b))
            .unwrap();
        let err = a.assert_compatible(&b).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[nest]: [id]: incompatible: regex `[0-9]+` is not equal to regex `(?s).*`"
        );
        assert!(matches!(err.root(), SchemaError::Incompatible { .. }));
    }

    #[test]
    fn test_map_compatibility_checks_both_descriptors() {
        let a = Parameter::map(Parameter::string(), Parameter::int());
        let b = Parameter::map(Parameter::string(), Parameter::int());
        let c = Parameter::map(Parameter::int(), Parameter::int());
        let d = Parameter::map(Parameter::string(), Parameter::float());
        assert_both_ways(&a, &b, true);
        assert_both_ways(&a, &c, false);
        assert_both_ways(&a, &d, false);
    }

    #[test]
    fn test_empty_collections_are_compatible() {
        assert!(Parameters::new().assert_compatible(&Parameters::new()).is_ok());
    }

    #[test]
    fn test_compatibility_does_not_validate_values() {
        // A compatible pair still validates values independently.
        let a = Parameter::int().with_default(1).unwrap();
        let b = Parameter::int();
        assert_both_ways(&a, &b, true);
        assert!(b.validate(&Value::from(1.5)).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy over scalar descriptors, patterns included.
    fn scalar_parameter() -> impl Strategy<Value = Parameter> {
        prop_oneof![
            Just(Parameter::null()),
            Just(Parameter::bool()),
            Just(Parameter::int()),
            Just(Parameter::float()),
            Just(Parameter::string()),
            "[a-z0-9+*?\\[\\]]{1,6}".prop_filter_map("must compile", |text| {
                crate::pattern::Pattern::new(text).ok().map(Parameter::string_matching)
            }),
        ]
    }

    proptest! {
        /// Every descriptor is compatible with itself.
        #[test]
        fn compatibility_is_reflexive(parameter in scalar_parameter()) {
            prop_assert!(parameter.assert_compatible(&parameter).is_ok());
        }

        /// The relation never depends on which side asserts.
        #[test]
        fn compatibility_is_symmetric(a in scalar_parameter(), b in scalar_parameter()) {
            prop_assert_eq!(
                a.assert_compatible(&b).is_ok(),
                b.assert_compatible(&a).is_ok()
            );
        }
    }
}
