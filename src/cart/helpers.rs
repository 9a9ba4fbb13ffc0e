//! Cart Business Logic Helpers
//!
//! Pure functions over line items: price recomputation and in-place cart
//! mutation. Keeping them free of I/O makes them testable without a
//! storage dependency.

use super::models::{LineItem, PriceTotals, PricingRules};
use crate::money::round2;

/// Recomputes the derived totals from `items` under `rules`.
///
/// # Behaviour
///
/// * An empty cart yields the all-zero baseline (no shipping fee is
///   charged for an empty cart).
/// * `items_price` is the rounded sum of `price * qty` over every line.
/// * Shipping is free only strictly above the threshold (`>`, not `>=`).
/// * `tax_price` is the rounded VAT on the items subtotal.
/// * Coupon discounts are **not** part of these totals; they are applied
///   by the caller at display/submission time.
pub fn calculate_prices(items: &[LineItem], rules: &PricingRules) -> PriceTotals {
    if items.is_empty() {
        return PriceTotals::default();
    }

    let items_price = round2(items.iter().map(LineItem::line_total).sum());

    let shipping_price = if items_price > rules.free_shipping_threshold {
        0.0
    } else {
        rules.flat_shipping_fee
    };

    let tax_price = round2(items_price * rules.tax_rate);

    PriceTotals {
        items_price,
        shipping_price,
        tax_price,
        total_price: items_price + shipping_price + tax_price,
    }
}

/// Inserts `incoming` into `cart_items`, replacing the existing line with
/// the same product id.
///
/// # Behaviour
///
/// * Replacement is wholesale (last-write-wins): the incoming quantity and
///   display fields overwrite the old line, they are **not** added to it.
///   The UI sends the full desired line on every quantity change.
/// * New products are appended, preserving insertion order.
///
/// This function mutates `cart_items` in-place.
pub fn upsert_item(cart_items: &mut Vec<LineItem>, incoming: LineItem) {
    if let Some(existing) = cart_items.iter_mut().find(|i| i.id == incoming.id) {
        *existing = incoming;
    } else {
        cart_items.push(incoming);
    }
}

/// Removes the line with the given product id; no-op when absent.
pub fn remove_item(cart_items: &mut Vec<LineItem>, product_id: &str) {
    cart_items.retain(|i| i.id != product_id);
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Phone X, 1x Paperback"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.qty, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}
