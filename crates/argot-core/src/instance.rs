//! # Host Object Instances
//!
//! Object values carry arbitrary host data the engine cannot look into.
//! What it *can* check is type identity: an `Instance` records the concrete
//! Rust type it was built from, and object descriptors validate values by
//! comparing that identity. The payload travels behind an `Arc`, so values
//! containing instances stay cheap to clone and safe to share.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Identity of a concrete host type: its `TypeId` plus a diagnostic name.
///
/// Equality is driven by the `TypeId`; the name exists so error messages
/// and schema descriptions can say which type was meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Captures the identity of `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The diagnostic name of the type, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A shared, immutable handle to an arbitrary host object.
///
/// The engine never inspects the payload; it only compares identities and
/// hands the handle back out. Equality is handle identity — two instances
/// are equal iff they share the same allocation — because structural
/// equality is not definable over opaque payloads.
#[derive(Clone)]
pub struct Instance {
    identity: TypeIdentity,
    object: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wraps a host object, capturing its type identity.
    pub fn new<T: Any + Send + Sync>(object: T) -> Self {
        Self {
            identity: TypeIdentity::of::<T>(),
            object: Arc::new(object),
        }
    }

    /// The identity of the wrapped type.
    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// The diagnostic name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.identity.name
    }

    /// Whether the wrapped object is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.identity.id == TypeId::of::<T>()
    }

    /// Borrows the wrapped object as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object.downcast_ref()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instance").field(&self.identity.name).finish()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Widget {
        size: u32,
    }

    struct Gadget;

    #[test]
    fn test_identity_of_same_type_is_equal() {
        assert_eq!(TypeIdentity::of::<Widget>(), TypeIdentity::of::<Widget>());
        assert_ne!(TypeIdentity::of::<Widget>(), TypeIdentity::of::<Gadget>());
    }

    #[test]
    fn test_identity_name_mentions_type() {
        assert!(TypeIdentity::of::<Widget>().name().contains("Widget"));
    }

    #[test]
    fn test_is_and_downcast() {
        let instance = Instance::new(Widget { size: 3 });
        assert!(instance.is::<Widget>());
        assert!(!instance.is::<Gadget>());
        assert_eq!(instance.downcast_ref::<Widget>(), Some(&Widget { size: 3 }));
        assert!(instance.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn test_clone_shares_allocation() {
        let a = Instance::new(Widget { size: 1 });
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_allocations_are_not_equal() {
        // Equal payloads, separate allocations: handle identity says no.
        let a = Instance::new(Widget { size: 1 });
        let b = Instance::new(Widget { size: 1 });
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_names_type() {
        let instance = Instance::new(Gadget);
        assert!(format!("{instance:?}").contains("Gadget"));
    }
}
