//! Error taxonomy for the cart engine
//!
//! Every failure path returns the engine to the state immediately preceding
//! the failed operation; none of these variants is fatal.

use thiserror::Error;

/// Errors surfaced by cart, coupon and order operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Input rejected before any network call was made
    /// (empty coupon code, zero quantity, missing shipping fields).
    #[error("{0}")]
    Validation(String),

    /// The backend could not be reached, timed out, or returned an
    /// unreadable response.
    #[error("could not reach the store server")]
    Network(#[source] reqwest::Error),

    /// The backend processed the request and refused it; `message` is the
    /// raw backend-provided reason, suitable for display as-is.
    #[error("{message}")]
    Rejected { message: String },

    /// Reading or writing the persisted cart slot failed.
    #[error("cart storage error")]
    Storage(#[from] std::io::Error),

    /// A JSON payload (persisted slot or response body) was malformed.
    #[error("malformed cart data")]
    Corrupt(#[from] serde_json::Error),
}

impl CartError {
    /// Shorthand for a [`CartError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Shorthand for a [`CartError::Rejected`] with the given message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
