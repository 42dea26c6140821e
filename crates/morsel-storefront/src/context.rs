//! The store context.
//!
//! One context instance owns the catalog, the cart ledger, the resolved
//! identity and both submission workflows for the duration of a browsing
//! session. The rendering layer reads derived state from it and feeds user
//! intents into it. The context never renders and never navigates; it only
//! signals completion through its return values.

use crate::api::{Backend, HttpBackend};
use crate::auth::{AuthMode, Credentials, UserRecord};
use crate::config::StorefrontConfig;
use crate::error::CheckoutError;
use crate::submission::{Submission, SubmissionState};
use crate::user::User;
use morsel_commerce::cart::{pricing, Cart, CartTotals};
use morsel_commerce::catalog::Catalog;
use morsel_commerce::checkout::{DeliveryAddress, OrderPayload};
use morsel_commerce::{CommerceError, ProductId, UserId};
use morsel_data::ApiError;
use morsel_session::Session;
use tracing::{info, warn};

/// Session-store key the identity record lives under.
pub const IDENTITY_KEY: &str = "identity";

/// Error text when a submit arrives while another is in flight.
const SUBMISSION_IN_FLIGHT: &str = "a submission is already in progress";

/// The storefront's owned state and workflows.
pub struct StoreContext {
    catalog: Catalog,
    cart: Cart,
    user: User,
    session: Session<UserRecord>,
    backend: Box<dyn Backend>,
    order_submission: Submission,
    auth_submission: Submission,
}

impl StoreContext {
    /// Create a context over the HTTP backend described by `config`.
    ///
    /// The persisted identity record, if any, resolves the initial user.
    pub fn new(
        catalog: Catalog,
        config: &StorefrontConfig,
        session: Session<UserRecord>,
    ) -> Result<Self, ApiError> {
        let backend = HttpBackend::new(config)?;
        Ok(Self::with_backend(catalog, session, Box::new(backend)))
    }

    /// Create a context over any backend implementation.
    pub fn with_backend(
        catalog: Catalog,
        session: Session<UserRecord>,
        backend: Box<dyn Backend>,
    ) -> Self {
        let user = session.load().map(User::from).unwrap_or_default();
        Self {
            catalog,
            cart: Cart::new(),
            user,
            session,
            backend,
            order_submission: Submission::new(),
            auth_submission: Submission::new(),
        }
    }

    // --- catalog and cart ------------------------------------------------

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart ledger.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one of a product to the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        self.cart.add(product_id);
    }

    /// Remove one of a product from the cart.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    /// Sum of all cart quantities.
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Empty the cart. Called by the host after a completed order if it
    /// wants a fresh cart, never by the core itself.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Current pricing breakdown of the cart.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        pricing::totals(&self.cart, &self.catalog)
    }

    // --- identity --------------------------------------------------------

    /// The current user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Resolve a user id for checkout: the in-memory identity first, then
    /// the persisted session record.
    pub fn resolved_user_id(&self) -> Option<UserId> {
        self.user
            .user_id()
            .cloned()
            .or_else(|| self.session.load().map(|record| record.id))
    }

    /// Drop the identity, in memory and from the session store.
    pub fn sign_out(&mut self) {
        self.user = User::Anonymous;
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "failed to clear persisted identity");
        }
    }

    // --- authentication flow ---------------------------------------------

    /// Run one authentication attempt.
    ///
    /// `Ok(())` signals the caller to dismiss the authentication view. On
    /// success the returned identity (when the endpoint sent one) becomes
    /// the current user and is persisted through the session write path.
    pub async fn authenticate(
        &mut self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<(), CheckoutError> {
        if !self.auth_submission.begin() {
            return Err(CheckoutError::Rejected(SUBMISSION_IN_FLIGHT.to_string()));
        }
        self.auth_submission.submitting();

        let result = self.backend.authenticate(mode, credentials).await;
        match result {
            Ok(record) => {
                if let Some(record) = record {
                    if let Err(e) = self.session.save(&record) {
                        // Auth still succeeded; only persistence is lost.
                        warn!(error = %e, "failed to persist identity record");
                    }
                    info!(user = %record.id, "identity resolved");
                    self.user = User::from(record);
                }
                self.auth_submission.succeed();
                Ok(())
            }
            Err(e) => {
                self.auth_submission.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// State of the authentication workflow.
    pub fn auth_state(&self) -> SubmissionState {
        self.auth_submission.state()
    }

    /// Displayed error of the last failed authentication attempt.
    pub fn auth_error(&self) -> Option<&str> {
        self.auth_submission.error()
    }

    /// True while an authentication exchange is in flight.
    pub fn is_authenticating(&self) -> bool {
        self.auth_submission.in_flight()
    }

    // --- order flow ------------------------------------------------------

    /// Run one order submission attempt.
    ///
    /// Validation happens before anything is sent: without a resolvable
    /// identity the attempt fails `Unauthenticated`; without at least one
    /// valid line item it fails `EmptyCart`. `Ok(())` signals the caller
    /// that the order was accepted; the cart is left as-is.
    pub async fn place_order(
        &mut self,
        delivery_address: DeliveryAddress,
    ) -> Result<(), CheckoutError> {
        if !self.order_submission.begin() {
            return Err(CheckoutError::Rejected(SUBMISSION_IN_FLIGHT.to_string()));
        }

        let user_id = match self.resolved_user_id() {
            Some(id) => id,
            None => return Err(self.fail_order(CheckoutError::Unauthenticated)),
        };

        let payload =
            match OrderPayload::build(user_id, &self.cart, &self.catalog, delivery_address) {
                Ok(payload) => payload,
                Err(e) => return Err(self.fail_order(e.into())),
            };

        self.order_submission.submitting();

        let result = self.backend.place_order(&payload).await;
        match result {
            Ok(()) => {
                info!(
                    items = payload.food_items.len(),
                    total = payload.total_price,
                    "order placed"
                );
                self.order_submission.succeed();
                Ok(())
            }
            Err(e) => Err(self.fail_order(e)),
        }
    }

    /// State of the order workflow.
    pub fn order_state(&self) -> SubmissionState {
        self.order_submission.state()
    }

    /// Displayed error of the last failed order attempt.
    pub fn order_error(&self) -> Option<&str> {
        self.order_submission.error()
    }

    /// True while an order exchange is in flight.
    pub fn is_placing_order(&self) -> bool {
        self.order_submission.in_flight()
    }

    /// Whether the submit affordance should be offered: no exchange in
    /// flight and something in the cart.
    pub fn can_place_order(&self) -> bool {
        self.order_submission.can_submit() && !self.cart.is_empty()
    }

    fn fail_order(&mut self, e: CheckoutError) -> CheckoutError {
        self.order_submission.fail(e.to_string());
        e
    }
}
