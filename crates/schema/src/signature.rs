//! Recursive field signatures and key-path traversal.
//!
//! Interface and object types describe their fields as nested maps. A leaf
//! holds a comparable value (a rendered type, a description, a default
//! value...) and a node groups further attributes, e.g. the arguments of a
//! field. Structural matching works on the flattened `(KeyPath, leaf)` view.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub type FieldMap = BTreeMap<String, Signature>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Signature {
    Node(FieldMap),
    Leaf(Value),
}

impl Signature {
    pub fn leaf(value: impl Into<Value>) -> Self {
        Signature::Leaf(value.into())
    }

    pub fn node<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Signature)>,
    {
        Signature::Node(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<Option<String>> for Signature {
    fn from(value: Option<String>) -> Self {
        Signature::Leaf(value.map(Value::String).unwrap_or(Value::Null))
    }
}

/// A leaf the interface leaves open: any value on the object satisfies it.
pub fn is_unconstrained(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Every leaf of `fields` paired with the key path leading to it.
pub fn flatten(fields: &FieldMap) -> Vec<(KeyPath, &Value)> {
    let mut out = Vec::new();
    flatten_into(fields, &KeyPath::default(), &mut out);
    out
}

fn flatten_into<'a>(fields: &'a FieldMap, prefix: &KeyPath, out: &mut Vec<(KeyPath, &'a Value)>) {
    for (key, signature) in fields {
        let path = prefix.child(key);
        match signature {
            Signature::Node(children) => flatten_into(children, &path, out),
            Signature::Leaf(value) => out.push((path, value)),
        }
    }
}

/// Follows `path` through `fields`.
///
/// Returns `None` when a segment is missing, when an intermediate segment is
/// a leaf, or when the path ends on a node.
pub fn lookup<'a>(fields: &'a FieldMap, path: &KeyPath) -> Option<&'a Value> {
    let (last, init) = path.segments().split_last()?;
    let mut current = fields;
    for segment in init {
        match current.get(segment)? {
            Signature::Node(children) => current = children,
            Signature::Leaf(_) => return None,
        }
    }
    match current.get(last)? {
        Signature::Leaf(value) => Some(value),
        Signature::Node(_) => None,
    }
}
