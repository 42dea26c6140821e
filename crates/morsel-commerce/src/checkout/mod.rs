//! Checkout types: delivery address and the order payload.

mod address;
mod payload;

pub use address::DeliveryAddress;
pub use payload::{OrderItem, OrderPayload};
