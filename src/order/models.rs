//! Order Assembly Models
//!
//! Wire shapes of the order-creation contract (`POST /orders`).

use serde::{Deserialize, Serialize};

use crate::cart::{PaymentMethod, ShippingAddress};

/// A cart line re-keyed to the backend's order item shape: the backend
/// expects the product id under `product`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product id under the backend's expected key
    pub product: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: f64,
    pub qty: u32,
}

/// Snapshot submitted to `POST /orders`.
///
/// Immutable once constructed and sent exactly once; discarded after
/// response handling. Success clears the cart (by the caller), failure
/// leaves the cart unchanged for retry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub order_items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub items_price: f64,
    pub shipping_price: f64,
    pub tax_price: f64,
    /// Final payable amount: `items + shipping + tax - coupon discount`
    pub total_price: f64,
    /// Present only when a coupon was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

/// Success body from `POST /orders`. The backend returns the full order
/// document; only the id matters to the client.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlacedOrder {
    #[serde(rename = "_id")]
    pub id: String,
}
