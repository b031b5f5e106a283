use serde::{Deserialize, Serialize};
use std::fmt;

/// Atom-like identifier a schema uses to refer to one of its types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(ident: impl Into<String>) -> Self {
        Self(ident.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(ident: &str) -> Self {
        Self::new(ident)
    }
}

impl From<String> for Identifier {
    fn from(ident: String) -> Self {
        Self(ident)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Where a type was defined. Only used to build diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeReference {
    pub identifier: Identifier,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl TypeReference {
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
            location: None,
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some(SourceLocation {
            file: file.into(),
            line,
        });
        self
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({})", self.identifier, location),
            None => write!(f, "{}", self.identifier),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeModifier {
    #[serde(rename = "list-type")]
    ListType,
    #[serde(rename = "non-null")]
    NonNull,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub root: String,
    #[serde(default)]
    pub modifiers: Vec<TypeModifier>,
}

impl TypeRef {
    pub fn named(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            modifiers: vec![],
        }
    }

    pub fn non_null(mut self) -> Self {
        self.modifiers.push(TypeModifier::NonNull);
        self
    }

    pub fn list(mut self) -> Self {
        self.modifiers.push(TypeModifier::ListType);
        self
    }

    pub fn to_sdl(&self) -> String {
        let mut rendered = self.root.clone();
        for modifier in &self.modifiers {
            match modifier {
                TypeModifier::ListType => rendered = format!("[{}]", rendered),
                TypeModifier::NonNull => rendered.push('!'),
            }
        }
        rendered
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValueDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ty: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_to_sdl() {
        assert_eq!(TypeRef::named("String").to_sdl(), "String");
        assert_eq!(TypeRef::named("String").non_null().to_sdl(), "String!");
        assert_eq!(
            TypeRef::named("String").non_null().list().non_null().to_sdl(),
            "[String!]!"
        );
    }

    #[test]
    fn test_type_reference_display() {
        let reference = TypeReference::new("person").at("schema.json", 12);
        assert_eq!(reference.to_string(), "person (schema.json:12)");
        assert_eq!(TypeReference::new("person").to_string(), "person");
    }
}
