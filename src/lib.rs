//! Storefront Cart Engine
//!
//! This library provides the client-side cart pricing and coupon-discount
//! engine for the storefront application:
//! - Cart state management with derived price totals
//! - Persistence of the cart across application restarts
//! - Coupon validation against the backend and per-item discount computation
//! - Order assembly and submission
//!
//! The engine is consumed in-process by UI event handlers; it exposes no
//! HTTP surface of its own. The two backend calls it performs
//! (`POST /coupons/validate`, `POST /orders`) go through [`ApiClient`].

// Domain modules
pub mod cart;
pub mod coupon;
pub mod order;

// Infrastructure
pub mod api;
pub mod error;
pub mod money;

// Re-export commonly used types for convenience
pub use api::ApiClient;
pub use cart::{
    Cart, CartStore, LineItem, PaymentMethod, PriceTotals, PricingRules, ShippingAddress,
};
pub use coupon::{compute_discount, CouponService, CouponState};
pub use error::CartError;
pub use order::{build_submission, OrderService, OrderSubmission, PlacedOrder};

// =============================================================================
// Constants
// =============================================================================

/// Orders with a subtotal strictly above this value ship for free
pub const FREE_SHIPPING_THRESHOLD: f64 = 10_000_000.0;

/// Flat shipping fee charged below the free-shipping threshold
pub const FLAT_SHIPPING_FEE: f64 = 30_000.0;

/// VAT rate applied to the items subtotal
pub const TAX_RATE: f64 = 0.10;

/// Key of the persisted cart slot
pub const CART_STORAGE_KEY: &str = "cart";
