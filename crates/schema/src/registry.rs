//! Type lookup for the resolution and conformance passes.

use std::collections::HashMap;

use super::field::FieldDefinition;
use super::interface::InterfaceType;
use super::object::ObjectType;
use super::types::{Identifier, TypeReference};

#[derive(Debug, Clone)]
pub enum SchemaType {
    Object(ObjectType),
    Interface(InterfaceType),
}

impl SchemaType {
    pub fn name(&self) -> &str {
        match self {
            SchemaType::Object(object) => &object.name,
            SchemaType::Interface(interface) => &interface.name,
        }
    }

    pub fn reference(&self) -> &TypeReference {
        match self {
            SchemaType::Object(object) => &object.reference,
            SchemaType::Interface(interface) => &interface.reference,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.reference().identifier
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SchemaType::Object(_) => "object",
            SchemaType::Interface(_) => "interface",
        }
    }

    pub fn definitions(&self) -> &[FieldDefinition] {
        match self {
            SchemaType::Object(object) => &object.definitions,
            SchemaType::Interface(interface) => &interface.definitions,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            SchemaType::Object(object) => Some(object),
            SchemaType::Interface(_) => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            SchemaType::Interface(interface) => Some(interface),
            SchemaType::Object(_) => None,
        }
    }
}

/// Read-only view of the types of a built schema.
pub trait TypeRegistry {
    fn lookup_type(&self, identifier: &Identifier) -> Option<&SchemaType>;

    /// Object types declaring `interface`, in schema declaration order.
    fn implementors(&self, interface: &Identifier) -> Vec<&ObjectType>;
}

/// An immutable, validated set of types. Built with
/// [`SchemaBuilder`](crate::builder::SchemaBuilder).
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: Vec<SchemaType>,
    index: HashMap<Identifier, usize>,
}

impl Schema {
    /// Indexes `types` by identifier; the first declaration of an identifier wins.
    pub(crate) fn from_types(types: Vec<SchemaType>) -> Self {
        let mut index = HashMap::with_capacity(types.len());
        for (position, ty) in types.iter().enumerate() {
            index.entry(ty.identifier().clone()).or_insert(position);
        }
        Self { types, index }
    }

    pub fn types(&self) -> &[SchemaType] {
        &self.types
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceType> {
        self.types.iter().filter_map(SchemaType::as_interface)
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.types.iter().filter_map(SchemaType::as_object)
    }

    pub fn interface(&self, identifier: &Identifier) -> Option<&InterfaceType> {
        self.lookup_type(identifier)?.as_interface()
    }

    pub fn object(&self, identifier: &Identifier) -> Option<&ObjectType> {
        self.lookup_type(identifier)?.as_object()
    }
}

impl TypeRegistry for Schema {
    fn lookup_type(&self, identifier: &Identifier) -> Option<&SchemaType> {
        self.index.get(identifier).map(|&position| &self.types[position])
    }

    fn implementors(&self, interface: &Identifier) -> Vec<&ObjectType> {
        self.objects()
            .filter(|object| object.interfaces.contains(interface))
            .collect()
    }
}
