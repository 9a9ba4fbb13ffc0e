//! Cart Store
//!
//! Single source of truth for cart contents and derived totals. The store
//! composes the pure cart state with a persistence adapter: every mutation
//! runs the reducer, recomputes the derived totals and synchronously writes
//! the slot before returning the new totals.
//!
//! Construct one store at application startup and inject it into consumers;
//! there is no process-wide singleton.

use std::sync::Arc;

use super::helpers::format_item_summary;
use super::models::{Cart, LineItem, PaymentMethod, PriceTotals, PricingRules, ShippingAddress};
use super::storage::CartStorage;
use crate::error::CartError;
use crate::CART_STORAGE_KEY;

/// The authoritative client-side cart, persisted across restarts.
pub struct CartStore {
    cart: Cart,
    rules: PricingRules,
    storage: Arc<dyn CartStorage>,
}

impl CartStore {
    /// Opens the store with the production pricing rules, hydrating from
    /// the persisted slot when one exists.
    pub fn open(storage: Arc<dyn CartStorage>) -> Result<Self, CartError> {
        Self::with_rules(storage, PricingRules::default())
    }

    /// Opens the store with custom pricing rules.
    ///
    /// A corrupt slot is logged and replaced by an empty cart rather than
    /// failing startup. Totals are recomputed after hydration, so they are
    /// consistent with the items even if the slot predates a rule change.
    pub fn with_rules(
        storage: Arc<dyn CartStorage>,
        rules: PricingRules,
    ) -> Result<Self, CartError> {
        let mut cart = match storage.load(CART_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => cart,
                Err(err) => {
                    tracing::warn!("discarding corrupt cart slot: {}", err);
                    Cart::default()
                }
            },
            None => Cart::default(),
        };
        cart.recalculate(&rules);

        tracing::debug!(
            "cart store opened with {} item(s)",
            cart.cart_items.len()
        );

        Ok(Self {
            cart,
            rules,
            storage,
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds `item`, or replaces the existing line with the same product id
    /// (last-write-wins). Quantities above the recorded stock level are
    /// accepted; the UI offers only valid choices and the backend has the
    /// final word at submission.
    pub fn add_item(&mut self, item: LineItem) -> Result<PriceTotals, CartError> {
        if item.qty == 0 {
            return Err(CartError::validation("quantity must be at least 1"));
        }
        self.cart.upsert_item(item);
        self.commit()
    }

    /// Removes the line with the given product id; no-op when absent.
    pub fn remove_item(&mut self, product_id: &str) -> Result<PriceTotals, CartError> {
        self.cart.remove_item(product_id);
        self.commit()
    }

    /// Flips the per-item selection flag; no-op when the id is absent.
    pub fn set_item_selected(
        &mut self,
        product_id: &str,
        selected: bool,
    ) -> Result<PriceTotals, CartError> {
        self.cart.set_item_selected(product_id, selected);
        self.commit()
    }

    /// Overwrites the shipping address wholesale (no partial merge).
    /// Rejects addresses with missing required fields.
    pub fn set_shipping_address(
        &mut self,
        address: ShippingAddress,
    ) -> Result<PriceTotals, CartError> {
        address.validate()?;
        self.cart.shipping_address = address;
        self.commit()
    }

    /// Overwrites the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) -> Result<PriceTotals, CartError> {
        self.cart.payment_method = method;
        self.commit()
    }

    /// Empties the line items and resets totals to the zero baseline.
    /// Shipping address and payment method are retained; use [`reset`]
    /// after logout or a placed order when those must go too.
    ///
    /// [`reset`]: CartStore::reset
    pub fn clear(&mut self) -> Result<PriceTotals, CartError> {
        self.cart.clear_items();
        self.commit()
    }

    /// Returns the whole store to its initial state and purges the
    /// persisted slot.
    pub fn reset(&mut self) -> Result<(), CartError> {
        self.cart = Cart::default();
        self.storage.remove(CART_STORAGE_KEY)?;
        tracing::debug!("cart store reset");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The full cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.cart.cart_items
    }

    /// The current derived totals.
    pub fn totals(&self) -> PriceTotals {
        self.cart.totals
    }

    /// Recomputes totals and writes the slot; every mutation funnels
    /// through here so a read after any mutation sees fresh totals.
    fn commit(&mut self) -> Result<PriceTotals, CartError> {
        self.cart.recalculate(&self.rules);

        let raw = serde_json::to_string(&self.cart)?;
        self.storage.save(CART_STORAGE_KEY, &raw)?;

        tracing::debug!(
            "cart persisted: [{}]",
            format_item_summary(&self.cart.cart_items)
        );
        Ok(self.cart.totals)
    }
}
