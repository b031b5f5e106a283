//! Serialized schema descriptions.
//!
//! A document lists interface and object types with their fields in the
//! typed authoring form. Only declarative resolvers and type tests can be
//! expressed; custom functions are attached in code.

use super::builder::SchemaBuilder;
use super::error::DocumentError;
use super::field::FieldDefinition;
use super::interface::{InterfaceType, TypeResolver};
use super::object::{ObjectType, TypeTest};
use super::types::{Identifier, SourceLocation, TypeReference};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDefinition {
    pub identifier: Identifier,
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub resolve_type: Option<TypeResolver>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDefinition {
    pub identifier: Identifier,
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub interfaces: Vec<Identifier>,
    #[serde(default)]
    pub is_type_of: Option<TypeTest>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TypeDefinition {
    #[serde(rename = "object-type")]
    Object(ObjectDefinition),
    #[serde(rename = "interface-type")]
    Interface(InterfaceDefinition),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchemaDocument {
    pub types: Vec<TypeDefinition>,
}

impl SchemaDocument {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Lowers every definition into the builder, in document order. Field
    /// definitions are kept, so the build reports every duplicate name.
    pub fn into_builder(self) -> SchemaBuilder {
        let mut builder = SchemaBuilder::new();
        for definition in self.types {
            match definition {
                TypeDefinition::Interface(def) => {
                    let mut interface = InterfaceType::new(def.identifier.clone(), def.name)
                        .with_fields(&def.fields)
                        .with_reference(reference(def.identifier, def.location));
                    interface.resolve_type = def.resolve_type;
                    builder = builder.interface(interface);
                }
                TypeDefinition::Object(def) => {
                    let mut object = ObjectType::new(def.identifier.clone(), def.name)
                        .with_fields(&def.fields)
                        .with_reference(reference(def.identifier, def.location));
                    object.interfaces = def.interfaces;
                    object.is_type_of = def.is_type_of;
                    builder = builder.object(object);
                }
            }
        }
        builder
    }
}

fn reference(identifier: Identifier, location: Option<SourceLocation>) -> TypeReference {
    TypeReference {
        identifier,
        location,
    }
}
