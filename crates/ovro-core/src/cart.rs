//! # Cart Engine
//!
//! The in-memory shopping cart for one checkout session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Counter Action           Operation                Line List Change     │
//! │  ──────────────           ─────────                ────────────────     │
//! │                                                                         │
//! │  Click Product ─────────► add_product() ─────────► qty += 1 or push    │
//! │                                                                         │
//! │  +/- Buttons ───────────► adjust_quantity() ─────► qty += delta        │
//! │                                                    (0 removes line)     │
//! │                                                                         │
//! │  Edit Price ────────────► set_price() ───────────► price overwritten   │
//! │                                                                         │
//! │  Trash Button ──────────► remove_line()                                │
//! │                                                                         │
//! │  Clear / Checkout ──────► clear()                                      │
//! │                                                                         │
//! │  Every operation is a total function: no error paths, no validation.   │
//! │  Input sanitation is the caller's job (see validation module).         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product again bumps
//!   the quantity instead of duplicating the line)
//! - Every line has quantity >= 1 (a line driven to 0 is removed)

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{DiscountRate, Money};
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart.
///
/// ## Snapshot Pattern
/// Product fields are copied at add time, so a later catalog edit does not
/// change what the customer was quoted. The price field is furthermore
/// editable per line (negotiated workshop pricing).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product id (uniqueness key within the cart).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Current line price in poisha. Starts as the catalog price, may be
    /// overwritten by `set_price`.
    pub price_poisha: i64,

    /// Cost price in poisha at time of adding (frozen).
    pub buy_price_poisha: i64,

    /// Quantity in cart (always >= 1 while the line exists).
    pub quantity: i64,
}

impl CartLine {
    /// Creates a cart line from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price_poisha: product.price_poisha,
            buy_price_poisha: product.buy_price_poisha,
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_poisha(self.price_poisha)
    }

    /// Line total = unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for the active checkout session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart.
    ///
    /// If a line with the same product id exists its quantity increments
    /// by 1; otherwise a new line with quantity 1 is appended. No stock
    /// availability check is performed (inventory and POS are decoupled).
    pub fn add_product(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine::from_product(product));
    }

    /// Adjusts a line's quantity by `delta`, clamping at 0 after the add.
    /// A line reaching quantity 0 is removed. Unknown ids are a no-op.
    pub fn adjust_quantity(&mut self, product_id: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = (line.quantity + delta).max(0);
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Overwrites a line's unit price unconditionally. Callers validate
    /// ("must be a positive number") before calling; unknown ids are a
    /// no-op.
    pub fn set_price(&mut self, product_id: &str, price: Money) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.price_poisha = price.poisha();
        }
    }

    /// Removes a line by product id. Unknown ids are a no-op.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Clears all lines (cart cancel or checkout completion).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of unique lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal: Σ(price × quantity).
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Computes the full totals breakdown for the given discount rate and
    /// service charge.
    ///
    /// `total = subtotal − discount_amount + service_charge`. Pure: same
    /// inputs always give the same breakdown.
    pub fn totals(&self, discount: DiscountRate, service_charge: Money) -> CartTotals {
        let subtotal = self.subtotal();
        let discount_amount = subtotal.discount_amount(discount);
        CartTotals {
            subtotal_poisha: subtotal.poisha(),
            discount_amount_poisha: discount_amount.poisha(),
            service_charge_poisha: service_charge.poisha(),
            total_poisha: (subtotal - discount_amount + service_charge).poisha(),
        }
    }
}

/// Totals breakdown as shown in the cart footer and on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub subtotal_poisha: i64,
    pub discount_amount_poisha: i64,
    pub service_charge_poisha: i64,
    pub total_poisha: i64,
}

impl CartTotals {
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_poisha(self.subtotal_poisha)
    }

    #[inline]
    pub fn discount_amount(&self) -> Money {
        Money::from_poisha(self.discount_amount_poisha)
    }

    #[inline]
    pub fn service_charge(&self) -> Money {
        Money::from_poisha(self.service_charge_poisha)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_poisha(self.total_poisha)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_taka: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Parts".to_string(),
            price_poisha: price_taka * 100,
            buy_price_poisha: price_taka * 60,
            stock: 10,
        }
    }

    #[test]
    fn test_add_product_merges_by_id() {
        let mut cart = Cart::new();
        let oil = product("1", 550);

        cart.add_product(&oil);
        cart.add_product(&oil);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.subtotal(), Money::from_taka(1100));
    }

    #[test]
    fn test_adjust_quantity_clamps_and_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 100));

        cart.adjust_quantity("1", 4);
        assert_eq!(cart.lines[0].quantity, 5);

        // Large negative delta clamps to 0 after the add, removing the line
        cart.adjust_quantity("1", -100);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 100));
        cart.adjust_quantity("missing", -1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_set_price_overwrites() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 550));
        cart.set_price("1", Money::from_taka(500));
        assert_eq!(cart.lines[0].price(), Money::from_taka(500));
        assert_eq!(cart.subtotal(), Money::from_taka(500));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 100));
        cart.add_product(&product("2", 200));

        cart.remove_line("1");
        assert_eq!(cart.line_count(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    /// End-to-end pricing scenario: Engine Oil ৳550 × 2,
    /// 10% discount, ৳100 service charge.
    #[test]
    fn test_totals_breakdown() {
        let mut cart = Cart::new();
        let oil = product("1", 550);
        cart.add_product(&oil);
        cart.add_product(&oil);

        let totals = cart.totals(DiscountRate::from_percentage(10.0), Money::from_taka(100));

        assert_eq!(totals.subtotal(), Money::from_taka(1100));
        assert_eq!(totals.discount_amount(), Money::from_taka(110));
        assert_eq!(totals.service_charge(), Money::from_taka(100));
        assert_eq!(totals.total(), Money::from_taka(1090));
        assert_eq!(
            totals.total(),
            totals.subtotal() - totals.discount_amount() + totals.service_charge()
        );
    }

    #[test]
    fn test_totals_is_pure() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 550));

        let rate = DiscountRate::from_percentage(7.5);
        let charge = Money::from_taka(50);
        assert_eq!(cart.totals(rate, charge), cart.totals(rate, charge));
    }

    /// Arbitrary add/adjust/remove sequences keep the invariants: at most
    /// one line per product id, every line quantity >= 1.
    #[test]
    fn test_invariants_hold_across_sequences() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        let b = product("b", 200);

        cart.add_product(&a);
        cart.add_product(&b);
        cart.add_product(&a);
        cart.adjust_quantity("a", -1);
        cart.adjust_quantity("b", 3);
        cart.add_product(&b);
        cart.remove_line("a");
        cart.add_product(&a);
        cart.adjust_quantity("a", 0);

        let mut ids: Vec<&str> = cart.lines.iter().map(|l| l.product_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.line_count());
        assert!(cart.lines.iter().all(|l| l.quantity >= 1));
    }
}
