use crate::model::User;
use model_framework::model_schema;
use serde::Serialize;

/// A customer order, opened for an existing [`User`].
///
/// # Model Framework
/// Orders are built through the constructor-argument factory path:
/// [`Order::create_with`](model_framework::Model::create_with) passes the
/// customer positionally to [`Order::for_customer`] before the payload is
/// applied. There is no `Default` construction for an order, so the
/// zero-argument factory does not exist for this type.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    customer: User,
    quantity: Option<u32>,
    total: Option<f64>,
    status: String,
}

impl Order {
    /// Positional constructor used by the factory.
    fn for_customer((customer,): (User,)) -> Self {
        Self {
            customer,
            quantity: None,
            total: None,
            status: "created".to_string(),
        }
    }

    /// The customer the order was opened for. Not a registered field:
    /// payloads cannot overwrite it.
    pub fn customer(&self) -> &User {
        &self.customer
    }
}

model_schema! {
    Order {
        construct(args: (User,)) = Order::for_customer;
        protected quantity: Option<u32>,
        protected total: Option<f64>,
        protected status: String,
    }
}
