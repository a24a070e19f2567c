//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Completed│       │
//! │  │  Cart    │     │          │     │  Panel   │     │   Sale   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart       complete_sale                      │
//! │       │           adjust_quantity   (checkout.rs)                      │
//! │       │           set_line_price                                        │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       │                ▼                                                │
//! │       └────────── clear_cart / hold_order                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::debug;

use ovro_core::{validation, Cart, CartLine, CartTotals};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, HeldOrder};

/// Cart response including lines and subtotal-only totals.
///
/// Discount and service charge live in the checkout panel, not the
/// cart itself, so the standing cart view carries no deductions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub subtotal_poisha: i64,
    pub total_quantity: i64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            subtotal_poisha: cart.subtotal().poisha(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Gets the current cart contents.
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by 1
/// - If product not in cart: added as a new line with quantity 1
/// - Price is frozen at time of adding (line price stays editable)
///
/// ## Arguments
/// * `product_id` - Catalog or manual-item id to add
///
/// ## Returns
/// Updated cart
#[tauri::command]
pub fn add_to_cart(
    catalog: State<'_, CatalogState>,
    cart: State<'_, CartState>,
    product_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .find(&product_id)
        .ok_or_else(|| ApiError::not_found("Product", &product_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_product(&product);
        CartResponse::from(&*c)
    }))
}

/// Adjusts a line quantity by a signed delta.
///
/// ## Behavior
/// - Resulting quantity is clamped at zero
/// - A line that reaches zero is removed
/// - Unknown product ids are a no-op (the line may have just been removed)
///
/// ## Arguments
/// * `product_id` - Line to adjust
/// * `delta` - Signed change, typically +1 or -1
#[tauri::command]
pub fn adjust_quantity(
    cart: State<'_, CartState>,
    product_id: String,
    delta: i64,
) -> CartResponse {
    debug!(product_id = %product_id, delta, "adjust_quantity command");

    cart.with_cart_mut(|c| {
        c.adjust_quantity(&product_id, delta);
        CartResponse::from(&*c)
    })
}

/// Overwrites the unit price of a cart line.
///
/// Workshop pricing is negotiated at the counter, so any line price
/// can be edited. The input arrives as the raw text field contents;
/// unparsable or negative input becomes zero.
///
/// ## Arguments
/// * `product_id` - Line to reprice
/// * `price` - New unit price in taka, as entered
#[tauri::command]
pub fn set_line_price(
    cart: State<'_, CartState>,
    product_id: String,
    price: String,
) -> CartResponse {
    debug!(product_id = %product_id, price = %price, "set_line_price command");

    let price = validation::parse_taka_or_zero(&price);
    cart.with_cart_mut(|c| {
        c.set_price(&product_id, price);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart.
#[tauri::command]
pub fn remove_from_cart(cart: State<'_, CartState>, product_id: String) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_line(&product_id);
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User cancels the sale
/// - After a sale completes (checkout clears explicitly)
#[tauri::command]
pub fn clear_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// Previews checkout totals for the current cart.
///
/// Both inputs arrive as raw text field contents from the checkout
/// panel and are parsed leniently: unparsable or negative values
/// become zero, and the discount is clamped to 0..=100 percent.
///
/// ## Arguments
/// * `discount` - Discount percentage, as entered
/// * `service_charge` - Service charge in taka, as entered
#[tauri::command]
pub fn preview_totals(
    cart: State<'_, CartState>,
    discount: String,
    service_charge: String,
) -> CartTotals {
    debug!(discount = %discount, service_charge = %service_charge, "preview_totals command");

    let discount = validation::parse_discount_or_zero(&discount);
    let service_charge = validation::parse_taka_or_zero(&service_charge);
    cart.with_cart(|c| c.totals(discount, service_charge))
}

/// Parks the current cart so another customer can be served.
#[tauri::command]
pub fn hold_order(cart: State<'_, CartState>) -> Result<CartResponse, ApiError> {
    debug!("hold_order command");

    cart.hold().map_err(ApiError::cart)?;
    Ok(cart.with_cart(|c| CartResponse::from(c)))
}

/// Restores the most recently held order into the live cart.
#[tauri::command]
pub fn recall_order(cart: State<'_, CartState>) -> Result<CartResponse, ApiError> {
    debug!("recall_order command");

    let restored = cart.recall().map_err(ApiError::cart)?;
    Ok(CartResponse::from(&restored))
}

/// Lists parked orders, oldest first.
#[tauri::command]
pub fn get_held_orders(cart: State<'_, CartState>) -> Vec<HeldOrder> {
    debug!("get_held_orders command");
    cart.held_orders()
}
