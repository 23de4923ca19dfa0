//! # Framework Errors
//!
//! This module defines the common error type used throughout the model
//! framework. By centralizing error definitions, every model type reports
//! the same failures the same way.

/// Errors produced by the dynamic model surface.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The field table for a model type is invalid: a field declared
    /// twice, or two distinct fields that collide once normalized.
    #[error("model schema misconfigured: {0}")]
    Configuration(String),
    /// A dynamic call that does not land on a known accessor, or a field
    /// name that resolves to nothing declared.
    #[error("method with name {0} does not exist")]
    UnknownMember(String),
    /// The field resolved, but is registered private or static.
    #[error("cannot access private or static properties")]
    AccessDenied,
    /// A `set`-prefixed dynamic call with no value argument.
    #[error("setter {0} called without a value argument")]
    MissingArgument(String),
    /// The supplied value cannot be converted to the field's type.
    #[error("invalid value for field {field}: {source}")]
    InvalidValue {
        field: &'static str,
        source: serde_json::Error,
    },
}
