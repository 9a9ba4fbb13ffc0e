//! Coupon Discount Computation
//!
//! Pure per-line discount arithmetic, kept separate from the validation
//! I/O so it can re-evaluate against the cart's *current* items at any
//! read without touching the network.

use super::models::CouponState;
use crate::cart::LineItem;
use crate::money::round2;

/// Computes the discount amount the coupon grants on `items`.
///
/// # Behaviour
///
/// * Returns 0 when the coupon is not applied.
/// * Eligibility is a **per-line filter**: a line qualifies when the scope
///   set is empty (global coupon) or contains the line's category.
///   Non-eligible lines contribute zero; this is not an all-or-nothing
///   cart-level discount.
/// * Each eligible line contributes `price * qty * percent / 100`; the
///   summed contribution is rounded once.
pub fn compute_discount(items: &[LineItem], coupon: &CouponState) -> f64 {
    if !coupon.is_applied {
        return 0.0;
    }

    let discounted: f64 = items
        .iter()
        .filter(|item| coupon.applies_to(&item.category))
        .map(|item| item.line_total() * coupon.discount_percent / 100.0)
        .sum();

    round2(discounted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn item(id: &str, category: &str, price: f64, qty: u32) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: category.to_string(),
            image: String::new(),
            price,
            qty,
            count_in_stock: 10,
            is_selected: true,
        }
    }

    fn coupon(percent: f64, categories: &[&str]) -> CouponState {
        CouponState {
            code: "TEST".into(),
            discount_percent: percent,
            applicable_categories: categories.iter().map(|c| c.to_string()).collect::<HashSet<_>>(),
            is_applied: true,
        }
    }

    #[test]
    fn unapplied_coupon_discounts_nothing() {
        let items = vec![item("a", "books", 100_000.0, 2)];
        assert_eq!(compute_discount(&items, &CouponState::default()), 0.0);
    }

    #[test]
    fn scoped_coupon_filters_per_line() {
        let items = vec![
            item("a", "books", 100_000.0, 2),
            item("b", "toys", 50_000.0, 1),
        ];

        // 50% off books only: discounts A's 200,000 subtotal, ignores B.
        let discount = compute_discount(&items, &coupon(50.0, &["books"]));
        assert_eq!(discount, 100_000.0);
    }

    #[test]
    fn scoped_coupon_with_no_matching_lines_discounts_nothing() {
        let items = vec![item("b", "toys", 50_000.0, 1)];
        assert_eq!(compute_discount(&items, &coupon(50.0, &["books"])), 0.0);
    }

    #[test]
    fn global_coupon_discounts_every_line() {
        let items = vec![
            item("a", "books", 100_000.0, 2),
            item("b", "toys", 50_000.0, 1),
        ];

        // Empty scope = all categories: 20% of 250,000.
        let discount = compute_discount(&items, &coupon(20.0, &[]));
        assert_eq!(discount, 50_000.0);
    }

    #[test]
    fn electronics_scenario_from_the_storefront() {
        let items = vec![item("tv", "electronics", 12_000_000.0, 1)];

        let discount = compute_discount(&items, &coupon(10.0, &["electronics"]));
        assert_eq!(discount, 1_200_000.0);
    }

    #[test]
    fn discount_is_rounded_once_over_the_sum() {
        // 15% of 333: 49.95 per unit; 3 units → 149.85 exactly after round2.
        let items = vec![item("a", "misc", 333.0, 3)];
        let discount = compute_discount(&items, &coupon(15.0, &["misc"]));
        assert_eq!(discount, 149.85);
    }
}
