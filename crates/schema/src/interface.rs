use super::field::{FieldDefinition, field_map};
use super::resolution::ExecutionContext;
use super::signature::FieldMap;
use super::types::{Identifier, TypeReference};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// What a type resolver says about a runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Type(Identifier),
    NoMatch,
}

pub type ResolverFn = dyn Fn(&Value, &ExecutionContext<'_>) -> Resolution + Send + Sync;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeResolver {
    /// The value's `field` holds the identifier of its concrete type.
    ByField { field: String },
    #[serde(skip)]
    Custom(Arc<ResolverFn>),
}

impl TypeResolver {
    pub fn custom<F>(resolver: F) -> Self
    where
        F: Fn(&Value, &ExecutionContext<'_>) -> Resolution + Send + Sync + 'static,
    {
        TypeResolver::Custom(Arc::new(resolver))
    }

    pub fn by_field(field: impl Into<String>) -> Self {
        TypeResolver::ByField {
            field: field.into(),
        }
    }

    pub fn call(&self, value: &Value, ctx: &ExecutionContext<'_>) -> Resolution {
        match self {
            TypeResolver::ByField { field } => match value.get(field).and_then(Value::as_str) {
                Some(ident) => Resolution::Type(Identifier::new(ident)),
                None => Resolution::NoMatch,
            },
            TypeResolver::Custom(resolver) => resolver(value, ctx),
        }
    }
}

impl fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeResolver::ByField { field } => {
                f.debug_struct("ByField").field("field", field).finish()
            }
            TypeResolver::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceType {
    pub name: String,
    pub fields: FieldMap,
    /// Typed fields as authored; empty when the fields came from a raw map.
    pub definitions: Vec<FieldDefinition>,
    pub resolve_type: Option<TypeResolver>,
    pub reference: TypeReference,
}

impl InterfaceType {
    pub fn new(identifier: impl Into<Identifier>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldMap::new(),
            definitions: vec![],
            resolve_type: None,
            reference: TypeReference::new(identifier),
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.reference.identifier
    }

    pub fn with_fields(mut self, fields: &[FieldDefinition]) -> Self {
        self.fields = field_map(fields);
        self.definitions = fields.to_vec();
        self
    }

    pub fn with_field_map(mut self, fields: FieldMap) -> Self {
        self.fields = fields;
        self.definitions.clear();
        self
    }

    pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolve_type = Some(resolver);
        self
    }

    pub fn with_reference(mut self, reference: TypeReference) -> Self {
        self.reference = reference;
        self
    }
}
