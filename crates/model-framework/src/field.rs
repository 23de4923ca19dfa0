//! # Field Metadata
//!
//! Every field a model exposes is registered as a [`FieldDescriptor`]:
//! its declared name, its visibility, whether it is a type-level entry,
//! and the accessor pair used to read and write it. Visibility lives in
//! the table rather than in Rust's own visibility system, so a model can
//! keep a field `pub` for its own code while still refusing dynamic
//! access to it.
//!
//! Private and static entries are registered *without* an accessor: a
//! denied field is unreachable by construction, not by convention.

use crate::error::ModelError;
use serde_json::Value;

/// Declared visibility of a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Read/write pair for one field.
///
/// Plain function pointers: the registration macro emits capture-free
/// closures, and hand-written custom accessors are ordinary methods.
pub struct Accessor<M> {
    pub get: fn(&M) -> Value,
    pub set: fn(&mut M, Value) -> Result<Value, ModelError>,
}

/// One registered field of a model type.
pub struct FieldDescriptor<M> {
    name: &'static str,
    visibility: Visibility,
    is_static: bool,
    accessor: Option<Accessor<M>>,
}

impl<M> FieldDescriptor<M> {
    /// An instance field with the given accessor pair.
    ///
    /// A descriptor declared [`Visibility::Private`] drops the accessor
    /// outright; use [`FieldDescriptor::private`] for clarity.
    pub fn new(name: &'static str, visibility: Visibility, accessor: Accessor<M>) -> Self {
        let accessor = match visibility {
            Visibility::Private => None,
            Visibility::Public | Visibility::Protected => Some(accessor),
        };
        Self {
            name,
            visibility,
            is_static: false,
            accessor,
        }
    }

    /// A private instance field: its name resolves, access is refused.
    pub fn private(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Private,
            is_static: false,
            accessor: None,
        }
    }

    /// A type-level entry: its name resolves, access is refused.
    pub fn static_entry(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            is_static: true,
            accessor: None,
        }
    }

    /// The exact name the field was declared under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the dynamic surface may touch this field at all.
    pub fn is_accessible(&self) -> bool {
        self.visibility != Visibility::Private && !self.is_static
    }

    /// Reads the current value, refusing private and static entries.
    pub fn read(&self, model: &M) -> Result<Value, ModelError> {
        match &self.accessor {
            Some(accessor) if self.is_accessible() => Ok((accessor.get)(model)),
            _ => Err(ModelError::AccessDenied),
        }
    }

    /// Writes a value, refusing private and static entries. Returns the
    /// value as stored, which the accessor may have transformed.
    pub fn write(&self, model: &mut M, value: Value) -> Result<Value, ModelError> {
        match &self.accessor {
            Some(accessor) if self.is_accessible() => (accessor.set)(model, value),
            _ => Err(ModelError::AccessDenied),
        }
    }
}

impl<M> std::fmt::Debug for FieldDescriptor<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("is_static", &self.is_static)
            .finish()
    }
}
