//! Runtime resolution of interface-typed values to concrete object types.

use serde_json::Value;

use crate::error::ResolveError;
use crate::interface::{InterfaceType, Resolution};
use crate::object::ObjectType;
use crate::registry::{SchemaType, TypeRegistry};

/// What the execution engine hands to resolvers.
#[derive(Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub schema: &'a dyn TypeRegistry,
    /// Response path of the value being resolved, for diagnostics.
    pub path: &'a [String],
}

impl<'a> ExecutionContext<'a> {
    pub fn new(schema: &'a dyn TypeRegistry) -> Self {
        Self { schema, path: &[] }
    }

    pub fn at(self, path: &'a [String]) -> Self {
        Self { path, ..self }
    }
}

/// Finds the object type `value` is an instance of.
///
/// Without a `resolve_type` the implementors are tried in registry order and
/// the first whose `is_type_of` accepts the value wins. `Ok(None)` means no
/// type could be determined, which the caller reports as it sees fit.
pub fn resolve<'s>(
    interface: &InterfaceType,
    value: &Value,
    ctx: &ExecutionContext<'s>,
) -> Result<Option<&'s ObjectType>, ResolveError> {
    let Some(resolver) = &interface.resolve_type else {
        let found = ctx
            .schema
            .implementors(interface.identifier())
            .into_iter()
            .find(|object| {
                let matched = object.is_type_of(value);
                tracing::trace!(
                    interface = %interface.name,
                    candidate = %object.name,
                    matched,
                    "tested implementor"
                );
                matched
            });
        tracing::debug!(
            interface = %interface.name,
            path = %ctx.path.join("."),
            resolved = found.map(|object| object.name.as_str()),
            "resolved by type tests"
        );
        return Ok(found);
    };

    let identifier = match resolver.call(value, ctx) {
        Resolution::Type(identifier) => identifier,
        Resolution::NoMatch => {
            tracing::debug!(
                interface = %interface.name,
                path = %ctx.path.join("."),
                "resolver declined value"
            );
            return Ok(None);
        }
    };

    match ctx.schema.lookup_type(&identifier) {
        Some(SchemaType::Object(object)) => {
            tracing::debug!(
                interface = %interface.name,
                path = %ctx.path.join("."),
                resolved = %object.name,
                "resolved by resolve_type"
            );
            Ok(Some(object))
        }
        Some(SchemaType::Interface(_)) => Err(ResolveError::NotAnObject {
            interface: interface.name.clone(),
            identifier,
        }),
        None => Err(ResolveError::UnknownType {
            interface: interface.name.clone(),
            identifier,
        }),
    }
}

#[cfg(test)]
#[path = "resolution_tests.rs"]
mod tests;
