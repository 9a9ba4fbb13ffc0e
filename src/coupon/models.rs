//! Coupon Domain Models
//!
//! Client-side coupon state and the wire shapes of the backend validation
//! contract.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cart::LineItem;

/// State of the coupon applied to the current checkout session.
///
/// Carries no serde derives: coupon state is never written to
/// the cart slot and must be re-entered after a reload. Mutated only by the
/// [`CouponService`](super::service::CouponService); callers reset it when
/// the cart empties or validation fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponState {
    /// The validated code, normalized to uppercase
    pub code: String,

    /// Discount percentage (0–100)
    pub discount_percent: f64,

    /// Categories the discount applies to; an empty set means the coupon
    /// applies to every category
    pub applicable_categories: HashSet<String>,

    /// True once the backend has accepted the code
    pub is_applied: bool,
}

impl CouponState {
    /// True when the coupon's scope covers the given category.
    pub fn applies_to(&self, category: &str) -> bool {
        self.applicable_categories.is_empty() || self.applicable_categories.contains(category)
    }

    /// Returns to the not-applied state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Wire shapes
// =============================================================================

/// Request body for `POST /coupons/validate`. The current line items are
/// sent along so the backend can apply quantity- or product-specific rules.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCouponRequest<'a> {
    pub code: &'a str,
    pub cart_items: &'a [LineItem],
}

/// Success body from `POST /coupons/validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCouponResponse {
    /// The code as the backend recorded it
    pub code: String,

    /// Discount percentage (0–100)
    pub discount: f64,

    /// Scope of the discount; empty or missing means all categories
    #[serde(default)]
    pub applicable_categories: HashSet<String>,
}
