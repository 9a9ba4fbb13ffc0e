//! Coupon Resolution Service
//!
//! Validates user-entered codes against the backend and produces the
//! [`CouponState`] consumed by discount computation.

use super::models::{CouponState, ValidateCouponRequest, ValidateCouponResponse};
use crate::api::ApiClient;
use crate::cart::LineItem;
use crate::error::CartError;

/// Client-side coupon validation against `POST /coupons/validate`.
pub struct CouponService {
    api: ApiClient,
}

impl CouponService {
    /// Creates the service on top of an [`ApiClient`].
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Validates `code` against the backend and returns the applied state.
    ///
    /// # Behaviour
    ///
    /// * Empty or whitespace-only codes are rejected locally; no request is
    ///   made.
    /// * The code is normalized to uppercase before it is sent.
    /// * The current line items travel with the request so the backend can
    ///   apply quantity- or product-specific rules.
    /// * On rejection the backend's message is surfaced verbatim; on
    ///   transport failure a connectivity error is returned. Either way no
    ///   applied state is produced.
    ///
    /// Coupons are single-use per checkout session: blocking a second
    /// `apply_coupon` once one is applied is the caller's responsibility
    /// (the UI disables the input). A validated coupon is not re-validated
    /// when the cart changes afterwards; [`compute_discount`] re-evaluates
    /// eligibility against the current items at read time instead.
    ///
    /// [`compute_discount`]: super::helpers::compute_discount
    pub async fn apply_coupon(
        &self,
        code: &str,
        items: &[LineItem],
    ) -> Result<CouponState, CartError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CartError::validation("coupon code is required"));
        }
        let code = code.to_uppercase();

        let request = ValidateCouponRequest {
            code: &code,
            cart_items: items,
        };
        let response: ValidateCouponResponse =
            self.api.post_json("/coupons/validate", &request).await?;

        tracing::info!(
            "coupon {} applied: {}% off {} category(ies)",
            response.code,
            response.discount,
            if response.applicable_categories.is_empty() {
                "all".to_string()
            } else {
                response.applicable_categories.len().to_string()
            }
        );

        Ok(CouponState {
            code: response.code,
            discount_percent: response.discount,
            applicable_categories: response.applicable_categories,
            is_applied: true,
        })
    }
}
