//! Order Assembly & Submission
//!
//! Transforms final cart state into the order-creation payload and submits
//! it. Clearing the cart after a successful order is left to the caller so
//! the side effect stays explicit and testable.

use super::models::{OrderItem, OrderSubmission, PlacedOrder};
use crate::api::ApiClient;
use crate::cart::Cart;
use crate::coupon::{compute_discount, CouponState};
use crate::error::CartError;
use crate::money::{format_vnd, round2};

/// Builds the order payload from the final cart and coupon state.
///
/// Line items are re-keyed to the backend shape, shipping address and
/// payment method are copied verbatim, and the total is the cart's grand
/// total minus the coupon discount evaluated against the current items.
/// The coupon code is included only when a coupon is applied.
pub fn build_submission(cart: &Cart, coupon: &CouponState) -> OrderSubmission {
    let discount = compute_discount(&cart.cart_items, coupon);
    let totals = cart.totals;

    OrderSubmission {
        order_items: cart
            .cart_items
            .iter()
            .map(|item| OrderItem {
                product: item.id.clone(),
                name: item.name.clone(),
                category: item.category.clone(),
                image: item.image.clone(),
                price: item.price,
                qty: item.qty,
            })
            .collect(),
        shipping_address: cart.shipping_address.clone(),
        payment_method: cart.payment_method,
        items_price: totals.items_price,
        shipping_price: totals.shipping_price,
        tax_price: totals.tax_price,
        total_price: round2(
            totals.items_price + totals.shipping_price + totals.tax_price - discount,
        ),
        coupon_code: coupon.is_applied.then(|| coupon.code.clone()),
    }
}

/// Order submission against `POST /orders`.
pub struct OrderService {
    api: ApiClient,
}

impl OrderService {
    /// Creates the service on top of an [`ApiClient`].
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submits the order. Single network call, no retry.
    ///
    /// On success the caller must invoke `CartStore::clear` (and reset the
    /// coupon state); the engine does not auto-clear. On failure nothing
    /// is touched, so the shopper can retry without re-entering shipping,
    /// payment or coupon details.
    pub async fn submit(&self, submission: &OrderSubmission) -> Result<PlacedOrder, CartError> {
        let placed: PlacedOrder = self.api.post_json("/orders", submission).await?;

        tracing::info!(
            "order {} placed, total {}",
            placed.id,
            format_vnd(submission.total_price)
        );
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{LineItem, PaymentMethod, PricingRules, ShippingAddress};
    use std::collections::HashSet;

    fn cart_with(items: Vec<LineItem>) -> Cart {
        let mut cart = Cart {
            cart_items: items,
            shipping_address: ShippingAddress {
                full_name: "Nguyen Van A".into(),
                phone: "0901234567".into(),
                address: "1 Le Loi".into(),
                city: "Ho Chi Minh City".into(),
                postal_code: "700000".into(),
                country: "Vietnam".into(),
            },
            payment_method: PaymentMethod::Cod,
            ..Cart::default()
        };
        cart.recalculate(&PricingRules::default());
        cart
    }

    fn item(id: &str, category: &str, price: f64, qty: u32) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: category.to_string(),
            image: format!("/images/{}.jpg", id),
            price,
            qty,
            count_in_stock: 10,
            is_selected: true,
        }
    }

    #[test]
    fn items_are_rekeyed_to_the_product_field() {
        let cart = cart_with(vec![item("abc123", "books", 100_000.0, 2)]);

        let submission = build_submission(&cart, &CouponState::default());

        assert_eq!(submission.order_items.len(), 1);
        assert_eq!(submission.order_items[0].product, "abc123");
        assert_eq!(submission.order_items[0].qty, 2);

        let wire = serde_json::to_value(&submission).unwrap();
        assert_eq!(wire["orderItems"][0]["product"], "abc123");
        assert!(wire["orderItems"][0].get("_id").is_none());
    }

    #[test]
    fn coupon_code_is_omitted_when_not_applied() {
        let cart = cart_with(vec![item("a", "books", 100_000.0, 1)]);

        let submission = build_submission(&cart, &CouponState::default());

        assert_eq!(submission.coupon_code, None);
        let wire = serde_json::to_value(&submission).unwrap();
        assert!(wire.get("couponCode").is_none());
    }

    #[test]
    fn applied_coupon_reduces_the_total_and_travels_with_the_order() {
        let cart = cart_with(vec![item("tv", "electronics", 12_000_000.0, 1)]);
        let coupon = CouponState {
            code: "TECH10".into(),
            discount_percent: 10.0,
            applicable_categories: HashSet::from(["electronics".to_string()]),
            is_applied: true,
        };

        let submission = build_submission(&cart, &coupon);

        // 12,000,000 + 0 shipping + 1,200,000 tax - 1,200,000 discount.
        assert_eq!(submission.items_price, 12_000_000.0);
        assert_eq!(submission.shipping_price, 0.0);
        assert_eq!(submission.tax_price, 1_200_000.0);
        assert_eq!(submission.total_price, 12_000_000.0);
        assert_eq!(submission.coupon_code.as_deref(), Some("TECH10"));
    }

    #[test]
    fn address_and_payment_are_copied_verbatim() {
        let cart = cart_with(vec![item("a", "books", 100_000.0, 1)]);

        let submission = build_submission(&cart, &CouponState::default());

        assert_eq!(submission.shipping_address, cart.shipping_address);
        assert_eq!(submission.payment_method, PaymentMethod::Cod);

        let wire = serde_json::to_value(&submission).unwrap();
        assert_eq!(wire["paymentMethod"], "COD");
        assert_eq!(wire["shippingAddress"]["fullName"], "Nguyen Van A");
    }
}
