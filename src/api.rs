//! Backend API client
//!
//! Thin JSON client for the two storefront endpoints the engine consumes
//! (`POST /coupons/validate` and `POST /orders`). Authentication itself is
//! handled elsewhere; this client only attaches the bearer token it is
//! given.

use crate::error::CartError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-request timeout. The UI runtime may abandon a call earlier, but a
/// request never outlives this bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// JSON client bound to the storefront backend's base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url` (with or without a
    /// trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    /// Attaches a bearer token sent with every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// POSTs `body` as JSON to `path` and deserializes the 2xx response.
    ///
    /// Transport failures and unreadable bodies become
    /// [`CartError::Network`]; non-2xx responses become
    /// [`CartError::Rejected`] carrying the backend `message` field when
    /// present.
    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, CartError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self.http.post(&url).timeout(REQUEST_TIMEOUT).json(body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(CartError::Network)?;
        let status = response.status();

        if status.is_success() {
            return response.json::<R>().await.map_err(CartError::Network);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("server responded with {}", status),
        };
        tracing::warn!("POST {} rejected: {}", url, message);
        Err(CartError::rejected(message))
    }
}
