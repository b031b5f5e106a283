//! Build-time check that every value of an interface can be resolved.

use crate::interface::InterfaceType;
use crate::registry::TypeRegistry;

/// Whether runtime values of `interface` can always be mapped to a concrete type.
///
/// A custom resolver is trusted to always answer. Without one, every
/// implementor must carry an `is_type_of` test.
pub fn is_resolvable(schema: &dyn TypeRegistry, interface: &InterfaceType) -> bool {
    interface.resolve_type.is_some()
        || schema
            .implementors(interface.identifier())
            .iter()
            .all(|object| object.has_type_test())
}

/// Names of the implementors that make `interface` unresolvable.
pub fn unresolvable_implementors(
    schema: &dyn TypeRegistry,
    interface: &InterfaceType,
) -> Vec<String> {
    if interface.resolve_type.is_some() {
        return vec![];
    }
    schema
        .implementors(interface.identifier())
        .into_iter()
        .filter(|object| !object.has_type_test())
        .map(|object| object.name.clone())
        .collect()
}
