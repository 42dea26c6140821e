//! Storefront context and submission workflows for Morsel.
//!
//! This crate ties the domain types of `morsel-commerce` to the outside
//! world: it owns the cart and the resolved identity for one browsing
//! session, runs the authentication and order-submission state machines,
//! and exchanges JSON with the backend through `morsel-data`.
//!
//! The rendering layer is an external collaborator: it reads derived state
//! (totals, in-flight flags, error text) from [`StoreContext`] and feeds
//! user intents into it. Every mutation happens on a discrete event
//! callback; each network submission is a single suspend point whose
//! in-flight state disables the submit affordance.
//!
//! # Example
//!
//! ```rust,ignore
//! use morsel_storefront::prelude::*;
//! use morsel_session::{Session, Store};
//!
//! let session = Session::new(Store::open(".morsel")?, IDENTITY_KEY);
//! let mut store = StoreContext::new(catalog, &StorefrontConfig::new(), session)?;
//!
//! store.add_to_cart("greek-salad".into());
//!
//! store
//!     .authenticate(AuthMode::Login, &Credentials::login(email, password))
//!     .await?;
//! store.place_order(delivery_address).await?;
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod submission;
pub mod user;

pub use api::{Backend, HttpBackend};
pub use auth::{AuthMode, Credentials, UserRecord};
pub use config::StorefrontConfig;
pub use context::{StoreContext, IDENTITY_KEY};
pub use error::CheckoutError;
pub use submission::{Submission, SubmissionState};
pub use user::User;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{Backend, HttpBackend};
    pub use crate::auth::{AuthMode, Credentials, UserRecord};
    pub use crate::config::StorefrontConfig;
    pub use crate::context::{StoreContext, IDENTITY_KEY};
    pub use crate::error::CheckoutError;
    pub use crate::submission::{Submission, SubmissionState};
    pub use crate::user::User;
}
