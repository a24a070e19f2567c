//! # Cart State
//!
//! Manages the live cart and any held (parked) orders.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Click Product ──────────► add_to_cart() ───────► merge or push line   │
//! │                                                                         │
//! │  +/- Buttons ────────────► adjust_quantity() ───► qty += delta          │
//! │                                                                         │
//! │  Edit Price ─────────────► set_line_price() ────► line.price = p        │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► lines.remove(i)      │
//! │                                                                         │
//! │  Click Hold ─────────────► hold_order() ────────► held.push, clear     │
//! │                                                                         │
//! │  Click Recall ───────────► recall_order() ──────► cart = held.pop()    │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use ovro_core::Cart;

/// A cart parked aside while another customer is served.
///
/// Held orders live only in memory. They are lost when the app closes,
/// which matches how paper tickets work at the counter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldOrder {
    /// When the order was parked
    pub held_at: DateTime<Utc>,

    /// The cart contents at the time of holding
    pub cart: Cart,
}

/// Tauri-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are typically quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    held: Mutex<Vec<HeldOrder>>,
}

impl CartState {
    /// Creates a new empty cart state with no held orders.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            held: Mutex::new(Vec::new()),
        }
    }

    fn lock_cart(&self) -> MutexGuard<'_, Cart> {
        match self.cart.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_held(&self) -> MutexGuard<'_, Vec<HeldOrder>> {
        match self.held.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let subtotal = cart_state.with_cart(|cart| cart.subtotal());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock_cart();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_product(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock_cart();
        f(&mut cart)
    }

    /// Parks the live cart and starts a fresh one.
    ///
    /// Returns an error if the live cart is empty, since holding
    /// nothing is always a misclick.
    pub fn hold(&self) -> Result<(), String> {
        let mut cart = self.lock_cart();
        if cart.is_empty() {
            return Err("Cannot hold an empty cart".to_string());
        }

        let parked = std::mem::take(&mut *cart);
        self.lock_held().push(HeldOrder {
            held_at: Utc::now(),
            cart: parked,
        });
        Ok(())
    }

    /// Restores the most recently held order into the live cart.
    ///
    /// Refuses to clobber a non-empty live cart; the cashier must
    /// complete or hold the current order first.
    pub fn recall(&self) -> Result<Cart, String> {
        let mut cart = self.lock_cart();
        if !cart.is_empty() {
            return Err("Finish or hold the current order before recalling".to_string());
        }

        let held = self
            .lock_held()
            .pop()
            .ok_or_else(|| "No held orders to recall".to_string())?;
        *cart = held.cart;
        Ok(cart.clone())
    }

    /// Returns a snapshot of all held orders, oldest first.
    pub fn held_orders(&self) -> Vec<HeldOrder> {
        self.lock_held().clone()
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovro_core::Product;

    fn test_product(id: &str, price_poisha: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_poisha,
            buy_price_poisha: price_poisha / 2,
            category: "Parts".to_string(),
            stock: 10,
        }
    }

    #[test]
    fn test_with_cart_mut_adds_line() {
        let state = CartState::new();
        let product = test_product("p1", 55_000);

        state.with_cart_mut(|cart| cart.add_product(&product));

        assert_eq!(state.with_cart(|cart| cart.total_quantity()), 1);
    }

    #[test]
    fn test_hold_and_recall() {
        let state = CartState::new();
        let product = test_product("p1", 55_000);

        state.with_cart_mut(|cart| cart.add_product(&product));
        state.hold().unwrap();

        assert!(state.with_cart(|cart| cart.is_empty()));
        assert_eq!(state.held_orders().len(), 1);

        let restored = state.recall().unwrap();
        assert_eq!(restored.total_quantity(), 1);
        assert!(state.held_orders().is_empty());
    }

    #[test]
    fn test_hold_empty_cart_rejected() {
        let state = CartState::new();
        assert!(state.hold().is_err());
    }

    #[test]
    fn test_recall_with_live_cart_rejected() {
        let state = CartState::new();
        let product = test_product("p1", 55_000);

        state.with_cart_mut(|cart| cart.add_product(&product));
        state.hold().unwrap();

        // New customer started in the meantime
        state.with_cart_mut(|cart| cart.add_product(&product));
        assert!(state.recall().is_err());
        assert_eq!(state.held_orders().len(), 1);
    }

    #[test]
    fn test_recall_with_nothing_held_rejected() {
        let state = CartState::new();
        assert!(state.recall().is_err());
    }
}
