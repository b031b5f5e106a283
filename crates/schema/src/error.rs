//! Error types for schema building and runtime type resolution.

use crate::matcher::Mismatch;
use crate::types::Identifier;
use std::path::PathBuf;

/// A problem found while validating a schema before it serves queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Two types share an identifier.
    #[error("duplicate type identifier '{identifier}'")]
    DuplicateType { identifier: Identifier },

    /// Two fields or arguments of one type share a name.
    #[error("duplicate {scope} name '{name}' in {kind} '{ty}'")]
    DuplicateName {
        scope: &'static str,
        name: String,
        kind: &'static str,
        ty: String,
    },

    /// The interface has no resolver and some implementors cannot be told apart.
    #[error(
        "interface '{interface}' has no resolve_type and these implementors lack is_type_of: {}",
        .implementors.join(", ")
    )]
    UnresolvableInterface {
        interface: String,
        implementors: Vec<String>,
    },

    #[error("object '{object}' declares unknown interface '{interface}'")]
    UnknownInterface {
        object: String,
        interface: Identifier,
    },

    #[error("object '{object}' declares '{interface}' as an interface, but it is not one")]
    NotAnInterface {
        object: String,
        interface: Identifier,
    },

    #[error("object '{object}' does not implement interface '{interface}': {mismatch}")]
    DoesNotImplement {
        object: String,
        interface: String,
        mismatch: Mismatch,
    },
}

/// Every diagnostic of a rejected schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("schema is invalid ({} error(s))", .errors.len())]
pub struct BuildError {
    pub errors: Vec<SchemaError>,
}

/// A custom resolver broke its contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("resolver for interface '{interface}' returned unknown type '{identifier}'")]
    UnknownType {
        interface: String,
        identifier: Identifier,
    },

    #[error("resolver for interface '{interface}' returned '{identifier}', which is not an object type")]
    NotAnObject {
        interface: String,
        identifier: Identifier,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read schema document {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
