use super::signature::{FieldMap, Signature};
use super::types::{InputValueDefinition, TypeRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ty: TypeRef,
    #[serde(default)]
    pub args: Vec<InputValueDefinition>,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            args: vec![],
            deprecation_reason: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_arg(mut self, arg: InputValueDefinition) -> Self {
        self.args.push(arg);
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Lowers the field into the nested signature used for structural matching.
    pub fn to_signature(&self) -> Signature {
        let args = self.args.iter().map(|arg| {
            let signature = Signature::node([
                ("name", Signature::leaf(arg.name.as_str())),
                ("type", Signature::leaf(arg.ty.to_sdl())),
                ("description", Signature::from(arg.description.clone())),
                ("default_value", Signature::from(arg.default_value.clone())),
            ]);
            (arg.name.clone(), signature)
        });

        Signature::node([
            ("name", Signature::leaf(self.name.as_str())),
            ("type", Signature::leaf(self.ty.to_sdl())),
            ("description", Signature::from(self.description.clone())),
            (
                "deprecation_reason",
                Signature::from(self.deprecation_reason.clone()),
            ),
            ("args", Signature::node(args)),
        ])
    }
}

/// Keys the lowered signatures by field name.
pub fn field_map(fields: &[FieldDefinition]) -> FieldMap {
    fields
        .iter()
        .map(|field| (field.name.clone(), field.to_signature()))
        .collect()
}
