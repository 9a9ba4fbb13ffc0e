//! Cart Domain Models
//!
//! This module contains all data structures related to the cart business
//! domain, plus the pure mutation methods of [`Cart`]. Nothing here touches
//! storage or the network; the I/O composition lives in
//! [`state`](super::state).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CartError;
use crate::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, TAX_RATE};

// =============================================================================
// Line items
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_qty() -> u32 {
    1
}

/// Returns the default selection state (selected) for cart items
fn default_selected() -> bool {
    true
}

/// One product entry in the cart.
///
/// Identity is the product id; the cart holds at most one line per product
/// and keeps lines in insertion order. `count_in_stock` is the stock level
/// reported when the product was added; the engine carries it for the UI
/// but does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id, as issued by the backend
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// Category the product belongs to (drives coupon eligibility)
    pub category: String,

    /// Image reference for display
    pub image: String,

    /// Unit price in VND
    pub price: f64,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_qty")]
    pub qty: u32,

    /// Stock level at the time the product was added
    pub count_in_stock: u32,

    /// Per-item selection flag for partial checkout (defaults to selected)
    #[serde(default = "default_selected")]
    pub is_selected: bool,
}

impl LineItem {
    /// Price of the whole line (`unit price * quantity`).
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

// =============================================================================
// Shipping & payment
// =============================================================================

/// Recipient address, overwritten wholesale on each save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Per-field required checks; there is no cross-field validation.
    /// The postal code is optional.
    pub fn validate(&self) -> Result<(), CartError> {
        let required = [
            ("recipient name", &self.full_name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("country", &self.country),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CartError::validation(format!("{} is required", label)));
            }
        }
        Ok(())
    }

    /// True when every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Payment method offered at checkout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    /// PayPal or credit card (the primary method)
    #[default]
    PayPal,
    /// Cash on delivery
    #[serde(rename = "COD")]
    Cod,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::PayPal => write!(f, "PayPal"),
            PaymentMethod::Cod => write!(f, "COD"),
        }
    }
}

// =============================================================================
// Derived totals & pricing rules
// =============================================================================

/// Derived price fields, always a pure function of the line items and the
/// pricing rules, never set directly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTotals {
    /// Sum of line totals, rounded
    pub items_price: f64,
    /// Flat fee, or zero above the free-shipping threshold
    pub shipping_price: f64,
    /// VAT on the items subtotal, rounded
    pub tax_price: f64,
    /// `items + shipping + tax`; coupon discounts are subtracted at the
    /// point of display/submission, not here
    pub total_price: f64,
}

/// Pricing configuration. The defaults are the storefront's production
/// values (see the crate-level constants).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRules {
    /// Subtotals strictly above this ship for free
    pub free_shipping_threshold: f64,
    /// Fee charged at or below the threshold
    pub flat_shipping_fee: f64,
    /// VAT rate applied to the items subtotal
    pub tax_rate: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            flat_shipping_fee: FLAT_SHIPPING_FEE,
            tax_rate: TAX_RATE,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart state: line items in insertion order, shipping and payment
/// choices, and the derived totals.
///
/// The serialized form is exactly the persisted slot layout
/// (`cartItems`, `shippingAddress`, `paymentMethod`, `itemsPrice`,
/// `shippingPrice`, `taxPrice`, `totalPrice`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Cart {
    /// Line items; uniqueness key is the product id
    pub cart_items: Vec<LineItem>,

    /// Empty until the shopper saves an address
    pub shipping_address: ShippingAddress,

    /// Defaults to the primary payment method
    pub payment_method: PaymentMethod,

    /// Derived totals, recomputed after every mutation
    #[serde(flatten)]
    pub totals: PriceTotals,
}

impl Cart {
    /// Inserts `item`, or replaces the existing line with the same product
    /// id (last-write-wins, not additive).
    pub fn upsert_item(&mut self, item: LineItem) {
        super::helpers::upsert_item(&mut self.cart_items, item);
    }

    /// Removes the line with the given product id; no-op when absent.
    pub fn remove_item(&mut self, product_id: &str) {
        super::helpers::remove_item(&mut self.cart_items, product_id);
    }

    /// Sets the selection flag on a line; returns false when absent.
    pub fn set_item_selected(&mut self, product_id: &str, selected: bool) -> bool {
        match self.cart_items.iter_mut().find(|i| i.id == product_id) {
            Some(item) => {
                item.is_selected = selected;
                true
            }
            None => false,
        }
    }

    /// Empties the line items. Shipping address and payment method are
    /// retained; `CartStore::reset` clears those too.
    pub fn clear_items(&mut self) {
        self.cart_items.clear();
    }

    /// Recomputes the derived totals from the current line items.
    pub fn recalculate(&mut self, rules: &PricingRules) {
        self.totals = super::helpers::calculate_prices(&self.cart_items, rules);
    }

    /// True when the cart holds no line items.
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }
}
