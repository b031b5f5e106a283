//! Structural matching of object fields against interface fields.
//!
//! An object implements an interface when every constrained leaf of the
//! interface's field signatures is present, with the same value, at the same
//! key path of the object's field signatures. The object may declare more
//! than the interface does.

use serde_json::Value;
use std::fmt;

use crate::interface::InterfaceType;
use crate::object::ObjectType;
use crate::signature::{KeyPath, flatten, is_unconstrained, lookup};

/// Attributes that never affect conformance, whatever the options say.
pub const ALWAYS_IGNORED_ATTRIBUTES: &[&str] = &["description"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Final key-path segments to skip in addition to [`ALWAYS_IGNORED_ATTRIBUTES`].
    pub ignored_attributes: Vec<String>,
}

impl MatchOptions {
    fn ignores(&self, path: &KeyPath) -> bool {
        path.last().is_some_and(|last| {
            ALWAYS_IGNORED_ATTRIBUTES.iter().any(|attr| *attr == last)
                || self.ignored_attributes.iter().any(|attr| attr == last)
        })
    }
}

/// The first interface constraint an object fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub path: KeyPath,
    pub expected: Value,
    pub found: Option<Value>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(found) => write!(
                f,
                "expected {} at '{}', found {}",
                self.expected, self.path, found
            ),
            None => write!(f, "expected {} at '{}', found nothing", self.expected, self.path),
        }
    }
}

pub fn implements(interface: &InterfaceType, object: &ObjectType) -> bool {
    implements_with(interface, object, &MatchOptions::default())
}

pub fn implements_with(
    interface: &InterfaceType,
    object: &ObjectType,
    options: &MatchOptions,
) -> bool {
    first_mismatch(interface, object, options).is_none()
}

pub fn first_mismatch(
    interface: &InterfaceType,
    object: &ObjectType,
    options: &MatchOptions,
) -> Option<Mismatch> {
    flatten(&interface.fields)
        .into_iter()
        .filter(|(path, expected)| !is_unconstrained(expected) && !options.ignores(path))
        .find_map(|(path, expected)| {
            let found = lookup(&object.fields, &path);
            if found == Some(expected) {
                return None;
            }
            tracing::trace!(
                interface = %interface.name,
                object = %object.name,
                path = %path,
                "field signature mismatch"
            );
            Some(Mismatch {
                found: found.cloned(),
                expected: expected.clone(),
                path,
            })
        })
}
