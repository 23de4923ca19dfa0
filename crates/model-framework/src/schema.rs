//! # Per-Type Field Registry
//!
//! `ModelSchema` is the explicit replacement for runtime reflection: a
//! table of [`FieldDescriptor`]s built once per concrete model type and
//! consulted for every dynamic access. Resolution computes the snake_case
//! and camelCase forms of the requested name and checks them against the
//! table in that order, so every supported key spelling lands on the field
//! under whichever spelling it was declared with.
//!
//! The table is frozen through [`SchemaBuilder::build`], which rejects
//! tables where two distinct fields would be conflated by normalization.

use crate::error::ModelError;
use crate::field::FieldDescriptor;
use crate::naming::{camelize, underscore};
use std::collections::HashMap;

/// The field table of one model type.
#[derive(Debug)]
pub struct ModelSchema<M> {
    fields: HashMap<&'static str, FieldDescriptor<M>>,
}

impl<M> ModelSchema<M> {
    pub fn builder() -> SchemaBuilder<M> {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Looks up a field by any supported spelling of its name.
    ///
    /// The snake_case form is checked before the camelCase form.
    pub fn resolve(&self, name: &str) -> Option<&FieldDescriptor<M>> {
        let snake = underscore(name);
        if let Some(field) = self.fields.get(snake.as_str()) {
            return Some(field);
        }
        let camel = camelize(name);
        self.fields.get(camel.as_str())
    }

    /// Looks up a field by its exact declared name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<M>> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Collects field descriptors and validates the finished table.
pub struct SchemaBuilder<M> {
    fields: Vec<FieldDescriptor<M>>,
}

impl<M> SchemaBuilder<M> {
    pub fn field(mut self, descriptor: FieldDescriptor<M>) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Validates and freezes the table.
    ///
    /// Two distinct fields must not collide once normalized: a table
    /// declaring both `first_name` and `firstName` would make resolution
    /// order load-bearing, so it is rejected outright.
    pub fn build(self) -> Result<ModelSchema<M>, ModelError> {
        let mut fields: HashMap<&'static str, FieldDescriptor<M>> = HashMap::new();
        for descriptor in self.fields {
            let name = descriptor.name();
            if fields.contains_key(name) {
                return Err(ModelError::Configuration(format!(
                    "field {name} is declared twice"
                )));
            }
            fields.insert(name, descriptor);
        }

        let mut canonical: HashMap<String, &'static str> = HashMap::new();
        for name in fields.keys().copied() {
            let canon = underscore(&camelize(name));
            if let Some(other) = canonical.insert(canon, name) {
                return Err(ModelError::Configuration(format!(
                    "fields {other} and {name} resolve to the same name"
                )));
            }
        }

        Ok(ModelSchema { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::field::{Accessor, FieldDescriptor, Visibility};
    use serde_json::Value;

    struct Probe {
        label: Option<String>,
    }

    fn read_label(probe: &Probe) -> Value {
        serde_json::to_value(&probe.label).unwrap_or(Value::Null)
    }

    fn write_label(probe: &mut Probe, value: Value) -> Result<Value, ModelError> {
        probe.label = serde_json::from_value(value).map_err(|source| {
            ModelError::InvalidValue {
                field: "label",
                source,
            }
        })?;
        Ok(serde_json::to_value(&probe.label).unwrap_or(Value::Null))
    }

    fn label_accessor() -> Accessor<Probe> {
        Accessor {
            get: read_label,
            set: write_label,
        }
    }

    #[test]
    fn resolves_a_snake_declared_field_from_every_spelling() {
        let schema = ModelSchema::builder()
            .field(FieldDescriptor::new(
                "display_label",
                Visibility::Protected,
                label_accessor(),
            ))
            .build()
            .unwrap();

        assert!(schema.resolve("display_label").is_some());
        assert!(schema.resolve("displayLabel").is_some());
        assert!(schema.resolve("DisplayLabel").is_some());
        assert!(schema.resolve("missing").is_none());
    }

    #[test]
    fn resolves_a_camel_declared_field_through_the_camel_form() {
        let schema = ModelSchema::builder()
            .field(FieldDescriptor::new(
                "displayLabel",
                Visibility::Protected,
                label_accessor(),
            ))
            .build()
            .unwrap();

        // The snake form misses, the camel form is checked second and hits.
        assert!(schema.resolve("display_label").is_some());
        assert!(schema.resolve("DisplayLabel").is_some());
    }

    #[test]
    fn rejects_a_field_declared_twice() {
        let result = ModelSchema::<Probe>::builder()
            .field(FieldDescriptor::private("label"))
            .field(FieldDescriptor::private("label"))
            .build();

        assert!(matches!(result, Err(ModelError::Configuration(_))));
    }

    #[test]
    fn rejects_two_fields_that_collide_once_normalized() {
        let result = ModelSchema::<Probe>::builder()
            .field(FieldDescriptor::private("first_name"))
            .field(FieldDescriptor::private("firstName"))
            .build();

        assert!(matches!(result, Err(ModelError::Configuration(_))));
    }

    #[test]
    fn private_descriptors_resolve_but_refuse_access() {
        let schema = ModelSchema::<Probe>::builder()
            .field(FieldDescriptor::private("label"))
            .build()
            .unwrap();
        let mut probe = Probe { label: None };

        let field = schema.resolve("label").expect("resolvable");
        assert!(matches!(field.read(&probe), Err(ModelError::AccessDenied)));
        assert!(matches!(
            field.write(&mut probe, Value::from("x")),
            Err(ModelError::AccessDenied)
        ));
    }

    #[test]
    fn static_entries_resolve_but_refuse_access() {
        let schema = ModelSchema::<Probe>::builder()
            .field(FieldDescriptor::static_entry("revision"))
            .build()
            .unwrap();
        let probe = Probe { label: None };

        let field = schema.resolve("revision").expect("resolvable");
        assert!(field.is_static());
        assert!(matches!(field.read(&probe), Err(ModelError::AccessDenied)));
    }
}
