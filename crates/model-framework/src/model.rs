//! # The `Model` Trait
//!
//! The `Model` trait is the contract a data-holding type implements to be
//! populated from associative data. It requires two things: a field table
//! ([`Model::schema`], usually generated by
//! [`model_schema!`](crate::model_schema)) and positional construction
//! ([`Model::construct`]). Everything else is provided on top of those:
//! the factory entry points, bulk assignment, and the string-keyed
//! get/set/call surface.
//!
//! # Architecture Note
//! There is no concrete "base model" type. The base capability is this
//! trait, and only types that implement it are constructible, so
//! instantiating the abstract base is a compile error rather than a
//! runtime check.
//!
//! # Failure Semantics
//! The direct surface (`get`, `set`, `call`) is strict: an unresolvable
//! name, a denied field, or an unconvertible value is an immediate
//! [`ModelError`]. Bulk assignment takes the opposite stance: payload
//! keys that cannot be applied are skipped silently, so partial or
//! over-wide payloads never abort the rest of the assignment.

use crate::error::ModelError;
use crate::naming::camelize;
use crate::schema::ModelSchema;
use serde_json::{Map, Value};
use tracing::debug;

/// Flat payload of field values keyed by name, in any supported spelling.
pub type DataMap = Map<String, Value>;

/// Length of the `get`/`set` method-name prefix.
const PREFIX_LEN: usize = 3;

/// Contract for model types populated from associative data.
pub trait Model: Sized + 'static {
    /// Positional constructor arguments. `()` when default construction
    /// is enough.
    type ConstructorArgs;

    /// The field table for this type, built once and cached.
    fn schema() -> &'static ModelSchema<Self>;

    /// Builds an instance from positional constructor arguments.
    fn construct(args: Self::ConstructorArgs) -> Self;

    /// Factory: default construction followed by bulk assignment.
    fn create(data: &DataMap) -> Self
    where
        Self: Default,
    {
        let mut model = Self::default();
        model.assign(data);
        model
    }

    /// Factory: positional construction followed by bulk assignment.
    fn create_with(args: Self::ConstructorArgs, data: &DataMap) -> Self {
        let mut model = Self::construct(args);
        model.assign(data);
        model
    }

    /// Bulk assignment of a payload.
    ///
    /// Each key is canonicalized to its setter spelling first, so
    /// kebab-case keys reach snake_case fields. Keys that resolve to no
    /// field, land on a denied field, or carry an unconvertible value are
    /// skipped without error; fields absent from the payload keep their
    /// current values.
    fn assign(&mut self, data: &DataMap) {
        let model_type = std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        debug!(model_type, size = data.len(), "Assign");

        for (key, value) in data {
            match self.set(&camelize(key), value.clone()) {
                Ok(_) => debug!(model_type, key = %key, "Assigned"),
                Err(error) => debug!(model_type, key = %key, %error, "Skipped"),
            }
        }
    }

    /// Reads a field by name, in any supported spelling.
    fn get(&self, field: &str) -> Result<Value, ModelError> {
        let descriptor = Self::schema()
            .resolve(field)
            .ok_or_else(|| ModelError::UnknownMember(field.to_string()))?;
        descriptor.read(self)
    }

    /// Writes a field by name, returning the value as stored.
    fn set(&mut self, field: &str, value: Value) -> Result<Value, ModelError> {
        let descriptor = Self::schema()
            .resolve(field)
            .ok_or_else(|| ModelError::UnknownMember(field.to_string()))?;
        descriptor.write(self, value)
    }

    /// Dynamic accessor dispatch: `getFoo` reads, `setFoo` writes.
    ///
    /// The method name is split into a three-character prefix and a
    /// remainder. Any prefix other than `get`/`set`, or a remainder that
    /// resolves to no declared field, fails with
    /// [`ModelError::UnknownMember`] naming the full requested method.
    fn call(&mut self, method: &str, args: Vec<Value>) -> Result<Value, ModelError> {
        let unknown = || ModelError::UnknownMember(method.to_string());
        let (prefix, remainder) = match (method.get(..PREFIX_LEN), method.get(PREFIX_LEN..)) {
            (Some(prefix), Some(remainder)) => (prefix, remainder),
            _ => return Err(unknown()),
        };
        let descriptor = Self::schema().resolve(remainder).ok_or_else(unknown)?;
        match prefix {
            "get" => descriptor.read(self),
            "set" => {
                let value = args
                    .into_iter()
                    .next()
                    .ok_or_else(|| ModelError::MissingArgument(method.to_string()))?;
                descriptor.write(self, value)
            }
            _ => Err(unknown()),
        }
    }
}

/// `construct` fallback used by [`model_schema!`](crate::model_schema)
/// when no constructor clause is given.
pub fn default_construct<M: Default>(_args: ()) -> M {
    M::default()
}
