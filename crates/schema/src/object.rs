use super::field::{FieldDefinition, field_map};
use super::signature::FieldMap;
use super::types::{Identifier, TypeReference};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub type TypeTestFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Decides whether a runtime value is an instance of an object type.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTest {
    /// The value is a map carrying this key.
    HasField(String),
    /// The value is a map whose `field` equals `value`.
    FieldEquals { field: String, value: Value },
    #[serde(skip)]
    Custom(Arc<TypeTestFn>),
}

impl TypeTest {
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        TypeTest::Custom(Arc::new(predicate))
    }

    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeTest::HasField(field) => value.get(field).is_some(),
            TypeTest::FieldEquals {
                field,
                value: expected,
            } => value.get(field) == Some(expected),
            TypeTest::Custom(predicate) => predicate(value),
        }
    }
}

impl fmt::Debug for TypeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTest::HasField(field) => f.debug_tuple("HasField").field(field).finish(),
            TypeTest::FieldEquals { field, value } => f
                .debug_struct("FieldEquals")
                .field("field", field)
                .field("value", value)
                .finish(),
            TypeTest::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: String,
    pub fields: FieldMap,
    /// Typed fields as authored; empty when the fields came from a raw map.
    pub definitions: Vec<FieldDefinition>,
    pub interfaces: Vec<Identifier>,
    pub is_type_of: Option<TypeTest>,
    pub reference: TypeReference,
}

impl ObjectType {
    pub fn new(identifier: impl Into<Identifier>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldMap::new(),
            definitions: vec![],
            interfaces: vec![],
            is_type_of: None,
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

    pub fn implementing(mut self, interface: impl Into<Identifier>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_type_test(mut self, test: TypeTest) -> Self {
        self.is_type_of = Some(test);
        self
    }

    pub fn with_reference(mut self, reference: TypeReference) -> Self {
        self.reference = reference;
        self
    }

    pub fn has_type_test(&self) -> bool {
        self.is_type_of.is_some()
    }

    /// An object without a type test never claims a value.
    pub fn is_type_of(&self, value: &Value) -> bool {
        self.is_type_of
            .as_ref()
            .is_some_and(|test| test.matches(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declarative_type_tests() {
        let value = json!({"kind": "person", "age": 30});

        assert!(TypeTest::HasField("age".to_string()).matches(&value));
        assert!(!TypeTest::HasField("employees".to_string()).matches(&value));
        assert!(
            TypeTest::FieldEquals {
                field: "kind".to_string(),
                value: json!("person"),
            }
            .matches(&value)
        );
        assert!(!TypeTest::HasField("age".to_string()).matches(&json!("age")));
    }

    #[test]
    fn test_missing_type_test_never_matches() {
        let object = ObjectType::new("business", "Business");
        assert!(!object.has_type_test());
        assert!(!object.is_type_of(&json!({"name": "Acme"})));
    }

    #[test]
    fn test_custom_type_test() {
        let object = ObjectType::new("person", "Person")
            .with_type_test(TypeTest::custom(|v| v.is_object()));
        assert!(object.is_type_of(&json!({})));
        assert!(!object.is_type_of(&json!(1)));
    }

    #[test]
    fn test_type_test_deserializes() {
        let test: TypeTest = serde_json::from_value(json!({"has_field": "age"})).unwrap();
        assert!(matches!(test, TypeTest::HasField(ref f) if f == "age"));

        let test: TypeTest = serde_json::from_value(
            json!({"field_equals": {"field": "kind", "value": "person"}}),
        )
        .unwrap();
        assert!(test.matches(&json!({"kind": "person"})));
    }
}
