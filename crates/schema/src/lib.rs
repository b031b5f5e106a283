//! Interface conformance and runtime type resolution for GraphQL-style schemas.
//!
//! At build time [`SchemaBuilder::build`] checks that every interface can be
//! resolved and that every object structurally implements the interfaces it
//! declares. At query time [`resolve`] maps an interface-typed value to its
//! concrete object type.

pub mod builder;
pub mod conformance;
pub mod document;
pub mod error;
pub mod field;
pub mod interface;
pub mod matcher;
pub mod object;
pub mod registry;
pub mod resolution;
pub mod signature;
pub mod types;
pub mod validator;

pub use builder::SchemaBuilder;
pub use conformance::{is_resolvable, unresolvable_implementors};
pub use document::SchemaDocument;
pub use error::{BuildError, DocumentError, ResolveError, SchemaError};
pub use field::FieldDefinition;
pub use interface::{InterfaceType, Resolution, TypeResolver};
pub use matcher::{MatchOptions, Mismatch, implements, implements_with};
pub use object::{ObjectType, TypeTest};
pub use registry::{Schema, SchemaType, TypeRegistry};
pub use resolution::{ExecutionContext, resolve};
pub use signature::{FieldMap, KeyPath, Signature};
pub use types::{Identifier, InputValueDefinition, TypeModifier, TypeRef, TypeReference};
