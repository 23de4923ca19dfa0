use model_framework::model_schema;
use serde::Serialize;

/// A catalog product, populated from inventory rows.
///
/// # Model Framework
/// `cost` is registered private (resolvable, never accessible), and
/// `table_name` is a type-level entry: both are refused by the dynamic
/// surface with an access error rather than silently missing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Product {
    name: Option<String>,
    price: Option<f64>,
    quantity: Option<u32>,
    #[allow(dead_code)]
    #[serde(skip_serializing)]
    cost: Option<f64>,
}

model_schema! {
    Product {
        protected name: Option<String>,
        protected price: Option<f64>,
        protected quantity: Option<u32>,
        private cost,
        static table_name,
    }
}
