//! Backend gateway.
//!
//! The storefront talks to exactly two endpoints: authentication and orders.
//! Both exchanges live behind the [`Backend`] trait so the submission flows
//! can run against a scripted double in tests; [`HttpBackend`] is the real
//! implementation over [`ApiClient`]. Any non-success status is a failure,
//! carrying the endpoint's `message` field when the error body has one.

use crate::auth::{AuthMode, Credentials, UserRecord};
use crate::config::StorefrontConfig;
use crate::error::CheckoutError;
use async_trait::async_trait;
use morsel_commerce::checkout::OrderPayload;
use morsel_data::{ApiClient, ApiError, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Path of the order endpoint.
pub const ORDER_ENDPOINT: &str = "/api/orders/";

/// Fallback shown when the order endpoint rejects without a message.
const ORDER_FAILURE_MESSAGE: &str = "Failed to place order";

/// Fallback shown when the auth endpoint rejects without a message.
const AUTH_FAILURE_MESSAGE: &str = "Something went wrong";

/// Error body shape shared by both endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Success body of the authentication endpoint.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    user: Option<UserRecord>,
}

/// The storefront's two backend exchanges.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Post credentials to the endpoint for `mode`.
    ///
    /// `Ok` carries the identity record when the endpoint returned one; a
    /// successful response without a record is still a success.
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<Option<UserRecord>, CheckoutError>;

    /// Post an assembled order payload.
    async fn place_order(&self, payload: &OrderPayload) -> Result<(), CheckoutError>;
}

/// [`Backend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    /// Build a backend from the storefront config.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client =
            ApiClient::with_timeout(config.timeout)?.with_base_url(config.api_base_url.clone());
        Ok(Self { client })
    }

    /// Build a backend over an existing client.
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<Option<UserRecord>, CheckoutError> {
        debug!(mode = mode.as_str(), "posting credentials");
        let response = self
            .client
            .post(mode.endpoint_path())
            .json(credentials)?
            .send()
            .await?;

        if response.is_success() {
            info!(mode = mode.as_str(), "authentication accepted");
            let body: AuthResponse = response.json().unwrap_or(AuthResponse { user: None });
            Ok(body.user)
        } else {
            let message = rejection_message(&response, AUTH_FAILURE_MESSAGE);
            warn!(
                mode = mode.as_str(),
                status = response.status,
                message = %message,
                "authentication rejected"
            );
            Err(CheckoutError::Rejected(message))
        }
    }

    async fn place_order(&self, payload: &OrderPayload) -> Result<(), CheckoutError> {
        debug!(
            items = payload.food_items.len(),
            total = payload.total_price,
            "posting order"
        );
        let response = self
            .client
            .post(ORDER_ENDPOINT)
            .json(payload)?
            .send()
            .await?;

        if response.is_success() {
            info!(items = payload.food_items.len(), "order accepted");
            Ok(())
        } else {
            let message = rejection_message(&response, ORDER_FAILURE_MESSAGE);
            warn!(
                status = response.status,
                message = %message,
                "order rejected"
            );
            Err(CheckoutError::Rejected(message))
        }
    }
}

/// Extract the endpoint's `message`, falling back to a generic one.
fn rejection_message(response: &Response, fallback: &str) -> String {
    response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> Response {
        Response::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_rejection_message_uses_endpoint_message() {
        let resp = response(400, r#"{ "message": "Invalid address" }"#);
        assert_eq!(
            rejection_message(&resp, ORDER_FAILURE_MESSAGE),
            "Invalid address"
        );
    }

    #[test]
    fn test_rejection_message_falls_back() {
        let resp = response(500, "internal server error");
        assert_eq!(
            rejection_message(&resp, ORDER_FAILURE_MESSAGE),
            ORDER_FAILURE_MESSAGE
        );

        let resp = response(400, r#"{ "error": "unnamed" }"#);
        assert_eq!(
            rejection_message(&resp, AUTH_FAILURE_MESSAGE),
            AUTH_FAILURE_MESSAGE
        );
    }
}
