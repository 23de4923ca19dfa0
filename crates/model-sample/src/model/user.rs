use model_framework::{model_schema, ModelError, Value};
use serde::Serialize;

/// A registered user, populated from request payloads.
///
/// # Model Framework
/// Fields are registered with [`model_schema!`], so payload keys in any
/// supported spelling (`first_name`, `first-name`, `firstName`) land on
/// the declared fields. The `email` field carries a hand-written accessor
/// pair that normalizes addresses to lower case; the pair shadows the
/// generated fallback on every surface, bulk assignment included.
#[derive(Debug, Clone, Default, Serialize)]
pub struct User {
    first_name: Option<String>,
    last_name: Option<String>,
    pub nickname: Option<String>,
    email: Option<String>,
    #[allow(dead_code)]
    #[serde(skip_serializing)]
    password_hash: Option<String>,
}

impl User {
    fn email_value(&self) -> Value {
        serde_json::to_value(&self.email).unwrap_or(Value::Null)
    }

    // Addresses compare case-insensitively, so they are stored folded.
    fn store_email(&mut self, value: Value) -> Result<Value, ModelError> {
        let email: Option<String> = serde_json::from_value(value).map_err(|source| {
            ModelError::InvalidValue {
                field: "email",
                source,
            }
        })?;
        self.email = email.map(|e| e.to_lowercase());
        Ok(self.email_value())
    }
}

model_schema! {
    User {
        protected first_name: Option<String>,
        protected last_name: Option<String>,
        public nickname: Option<String>,
        protected email: Option<String> { get = User::email_value, set = User::store_email },
        private password_hash,
    }
}
