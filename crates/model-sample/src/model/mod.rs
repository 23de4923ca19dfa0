//! Pure data structures registered with the [`Model`](model_framework::Model) trait.

pub mod user;
pub mod product;
pub mod order;

pub use user::*;
pub use product::*;
pub use order::*;
