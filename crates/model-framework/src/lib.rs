//! # Model Framework
//!
//! This crate provides the building blocks for simple data-holding model
//! types that are populated from associative data (decoded request
//! payloads, database rows) without hand-written getter/setter
//! boilerplate.
//!
//! ## Why a field registry?
//!
//! Dynamic languages solve this with magic-method interception and
//! runtime reflection: every unknown method call is parsed into a
//! `get`/`set` prefix and a field name, and the language's own visibility
//! rules are inspected on the fly. Here the same surface is backed by an
//! **explicit per-type field table**: each model registers its fields
//! once (declared name, visibility, accessor pair), the table is built at
//! first use and cached, and every dynamic access is a lookup in that
//! table. Visibility is declared metadata, not language reflection, and a
//! denied field carries no accessor at all.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Registration** ([`model_schema!`]): a declarative field list
//!    next to the struct definition. Generates the [`Model`] impl, a
//!    serde-bridged accessor pair per exposed field, and inherent typed
//!    accessors (`name()` / `set_name()`).
//! 2. **Registry** ([`ModelSchema`], [`FieldDescriptor`]): the frozen
//!    field table and the two-spelling name resolution over it.
//! 3. **Surface** ([`Model`]): provided operations on every registered
//!    type, from the factory entry points (`create`, `create_with`) to
//!    bulk assignment (`assign`) and the string-keyed accessors
//!    (`get`, `set`, `call`).
//!
//! ## Key spellings
//!
//! `first_name`, `first-name`, and `firstName` all reach the same field,
//! whichever spelling the model declared. Resolution computes the
//! snake_case form of the requested name first and the camelCase form
//! second; a table in which two *distinct* fields collide under that
//! normalization is rejected at registration with
//! [`ModelError::Configuration`].
//!
//! ## Quick Start
//!
//! ```
//! use model_framework::{data, model_schema, Model};
//!
//! #[derive(Debug, Default, Clone)]
//! struct Customer {
//!     first_name: Option<String>,
//!     last_name: Option<String>,
//! }
//!
//! model_schema! {
//!     Customer {
//!         protected first_name: Option<String>,
//!         protected last_name: Option<String>,
//!     }
//! }
//!
//! // One-step factory: construct, then bulk-assign. Spellings mix freely
//! // and unknown keys are dropped without error.
//! let mut customer = Customer::create(&data! {
//!     "first-name": "John",
//!     "lastName": "Doe",
//!     "ignored_key": true,
//! });
//!
//! assert_eq!(customer.call("getFirstName", vec![]).unwrap(), "John");
//! assert_eq!(customer.get("last_name").unwrap(), "Doe");
//! assert_eq!(customer.first_name().as_deref(), Some("John"));
//! ```
//!
//! ## Failure Semantics
//!
//! The direct surface is strict and immediate: [`ModelError::UnknownMember`]
//! for names that resolve to nothing, [`ModelError::AccessDenied`] for
//! private and static entries, [`ModelError::InvalidValue`] for values the
//! field's type rejects. Bulk assignment is deliberately lenient: it
//! skips what it cannot apply and never aborts the rest of the payload.

pub mod error;
pub mod field;
mod macros;
pub mod model;
pub mod naming;
pub mod schema;

pub use error::ModelError;
pub use field::{Accessor, FieldDescriptor, Visibility};
pub use model::{DataMap, Model};
pub use schema::{ModelSchema, SchemaBuilder};

// Re-exported for macro expansions.
pub use paste;
pub use serde_json;
pub use serde_json::Value;
