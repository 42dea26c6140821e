//! Storefront domain types and logic for Morsel.
//!
//! This crate holds the headless core of a food-ordering storefront:
//!
//! - **Catalog**: the read-only product list supplied at startup
//! - **Cart**: the quantity ledger and the pure pricing aggregator
//! - **Checkout**: delivery address and the order payload sent to the backend
//!
//! Everything here is plain data and pure computation. Network exchanges and
//! session persistence live in the sibling crates.
//!
//! # Example
//!
//! ```rust,ignore
//! use morsel_commerce::prelude::*;
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new("greek-salad", "Greek Salad", Money::new(1200, Currency::USD)),
//! ]);
//!
//! let mut cart = Cart::new();
//! cart.add(ProductId::new("greek-salad"));
//! cart.add(ProductId::new("greek-salad"));
//!
//! let totals = pricing::totals(&cart, &catalog)?;
//! println!("to pay: {}", totals.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::{ProductId, UserId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, UserId};
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{Catalog, Product};

    pub use crate::cart::{pricing, Cart, CartTotals};

    pub use crate::checkout::{DeliveryAddress, OrderItem, OrderPayload};
}
