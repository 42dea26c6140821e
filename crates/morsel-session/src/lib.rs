//! Persisted session records for Morsel.
//!
//! The storefront keeps one small record across sessions: the identity the
//! backend returned at login. This crate provides the JSON record store
//! (in-memory or file-backed) and a typed [`Session`] with one read path and
//! one write path over it.
//!
//! # Example
//!
//! ```rust,ignore
//! use morsel_session::{Session, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Identity { id: String }
//!
//! let store = Store::open("~/.morsel")?;
//! let session: Session<Identity> = Session::new(store, "identity");
//!
//! session.save(&Identity { id: "user-1".into() })?;
//! let restored = session.load();
//! ```

mod error;
mod session;
mod store;

pub use error::SessionError;
pub use session::Session;
pub use store::Store;
