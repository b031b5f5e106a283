use super::conformance::{is_resolvable, unresolvable_implementors};
use super::error::SchemaError;
use super::field::FieldDefinition;
use super::matcher::{MatchOptions, first_mismatch};
use super::registry::{Schema, SchemaType, TypeRegistry};
use std::collections::HashSet;

/// Reports repeated field names, and repeated argument names within each field.
pub fn duplicate_field_names(
    fields: &[FieldDefinition],
    kind: &'static str,
    ty: &str,
) -> Vec<SchemaError> {
    let mut errors = duplicate_names(fields.iter().map(|f| f.name.as_str()), kind, ty, "field");
    for field in fields {
        errors.extend(duplicate_names(
            field.args.iter().map(|arg| arg.name.as_str()),
            kind,
            ty,
            "argument",
        ));
    }
    errors
}

/// Reports each repeated name once, in order of its first repetition.
pub fn duplicate_names<'a, I>(
    names: I,
    kind: &'static str,
    ty: &str,
    scope: &'static str,
) -> Vec<SchemaError>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    names
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .map(|name| SchemaError::DuplicateName {
            scope,
            name: name.to_string(),
            kind,
            ty: ty.to_string(),
        })
        .collect()
}

/// Runs every build-time check and returns all problems found.
pub fn validate(schema: &Schema, options: &MatchOptions) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for ty in schema.types() {
        if !seen.insert(ty.identifier()) {
            errors.push(SchemaError::DuplicateType {
                identifier: ty.identifier().clone(),
            });
        }
    }

    for ty in schema.types() {
        errors.extend(duplicate_field_names(ty.definitions(), ty.kind(), ty.name()));
    }

    for interface in schema.interfaces() {
        if !is_resolvable(schema, interface) {
            errors.push(SchemaError::UnresolvableInterface {
                interface: interface.name.clone(),
                implementors: unresolvable_implementors(schema, interface),
            });
        }
    }

    for object in schema.objects() {
        for identifier in &object.interfaces {
            let interface = match schema.lookup_type(identifier) {
                Some(SchemaType::Interface(interface)) => interface,
                Some(SchemaType::Object(_)) => {
                    errors.push(SchemaError::NotAnInterface {
                        object: object.name.clone(),
                        interface: identifier.clone(),
                    });
                    continue;
                }
                None => {
                    errors.push(SchemaError::UnknownInterface {
                        object: object.name.clone(),
                        interface: identifier.clone(),
                    });
                    continue;
                }
            };

            if let Some(mismatch) = first_mismatch(interface, object, options) {
                errors.push(SchemaError::DoesNotImplement {
                    object: object.name.clone(),
                    interface: interface.name.clone(),
                    mismatch,
                });
            }
        }
    }

    errors
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
