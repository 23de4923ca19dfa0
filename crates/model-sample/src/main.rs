//! # Model Framework Sample
//!
//! A reference implementation of data-holding models populated from
//! associative payloads, built on `model-framework`.
//!
//! ## Core Components
//!
//! - **model**: Plain structs ([`User`], [`Product`], [`Order`])
//!   registered with [`model_schema!`](model_framework::model_schema).
//! - **tracing**: Observability setup for the demo binary.
//!
//! The entry point below populates each model from a request-style JSON
//! payload in mixed key spellings, drives the dynamic accessor surface,
//! and shows the strict error paths that bulk assignment deliberately
//! does not take.

use model_framework::{data, Model, Value};
use model_sample::model::{Order, Product, User};
use model_sample::tracing::setup_tracing;
use tracing::{info, warn};

fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Populating sample models from request-style payloads");

    // Key spellings mix freely; unknown keys are dropped without error.
    let user = User::create(&data! {
        "first_name": "John",
        "last-name": "Doe",
        "nickname": "johnny",
        "email": "John.Doe@Example.COM",
        "favorite_color": "unregistered, silently skipped",
    });
    info!(
        user = %serde_json::to_value(&user).unwrap_or(serde_json::Value::Null),
        "User populated"
    );

    // "price" survives, the unconvertible "quantity" is skipped.
    let product = Product::create(&data! {
        "name": "Super Widget",
        "price": 25.50,
        "quantity": "plenty",
    });
    info!(
        product = %serde_json::to_value(&product).unwrap_or(serde_json::Value::Null),
        "Product populated"
    );

    // Orders are constructed positionally, then assigned.
    let mut order = Order::create_with(
        (user.clone(),),
        &data! { "quantity": 5, "total": 127.50 },
    );
    match order.call("setStatus", vec![Value::from("paid")]) {
        Ok(status) => info!(%status, "Order status updated"),
        Err(error) => warn!(%error, "Order status update failed"),
    }
    info!(
        customer = order.customer().nickname.as_deref().unwrap_or("-"),
        status = %order.status(),
        "Order populated"
    );

    // The strict surface refuses what assignment would silently skip.
    if let Err(error) = order.call("getSecretDiscount", vec![]) {
        info!(%error, "Dynamic access correctly refused");
    }

    info!("Demo completed");
}
