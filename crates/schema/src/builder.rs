use super::error::BuildError;
use super::interface::InterfaceType;
use super::matcher::MatchOptions;
use super::object::ObjectType;
use super::registry::{Schema, SchemaType};
use super::validator::validate;

/// Collects type definitions and validates them into a [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: Vec<SchemaType>,
    options: MatchOptions,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interface(mut self, interface: InterfaceType) -> Self {
        self.types.push(SchemaType::Interface(interface));
        self
    }

    pub fn object(mut self, object: ObjectType) -> Self {
        self.types.push(SchemaType::Object(object));
        self
    }

    pub fn match_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Validates the collected types. Every problem is reported, not just the first.
    pub fn build(self) -> Result<Schema, BuildError> {
        let schema = Schema::from_types(self.types);
        let errors = validate(&schema, &self.options);

        if !errors.is_empty() {
            for error in &errors {
                tracing::warn!("{}", error);
            }
            return Err(BuildError { errors });
        }

        tracing::info!(
            "Successfully built schema with {} types",
            schema.types().len()
        );
        Ok(schema)
    }
}
