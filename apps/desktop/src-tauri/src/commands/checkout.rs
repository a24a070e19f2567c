//! # Checkout Commands
//!
//! Sale completion: runs the checkout pipeline against the live cart.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoke('complete_sale', { details })                                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Snapshot cart lines (cart stays intact during submit)      │    │
//! │  │  2. CheckoutPipeline: submit → followup scan → persist         │    │
//! │  │  3. On success only: clear the cart                            │    │
//! │  │  4. On failure: cart untouched, cashier can retry              │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  SaleReceipt { orderId, message, totals, remindersScheduled }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use tauri::State;
use tracing::{debug, info};

use ovro_core::CheckoutDetails;
use ovro_data::{PipelineState, SaleReceipt};

use crate::error::ApiError;
use crate::state::{CartState, DataState};

/// Completes the sale for the current cart.
///
/// The cart is only cleared after the pipeline reports success, so a
/// rejected or failed submission leaves everything in place for a retry.
///
/// ## Arguments
/// * `details` - Client info, payment method, discount, service charge
///
/// ## Returns
/// A receipt with the order id and the number of reminders scheduled
#[tauri::command]
pub async fn complete_sale(
    cart: State<'_, CartState>,
    data: State<'_, DataState>,
    details: CheckoutDetails,
) -> Result<SaleReceipt, ApiError> {
    debug!(payment_method = ?details.payment_method, "complete_sale command");

    let lines = cart.with_cart(|c| c.lines.clone());
    let today = Local::now().date_naive();

    let receipt = data.pipeline.complete_sale(lines, details, today).await?;

    cart.with_cart_mut(|c| c.clear());
    info!(
        order_id = %receipt.order_id,
        reminders = receipt.reminders_scheduled,
        "Sale completed, cart cleared"
    );

    Ok(receipt)
}

/// Returns the current checkout pipeline state.
///
/// The frontend polls this to disable the checkout button while a
/// submission is in flight.
#[tauri::command]
pub fn get_pipeline_state(data: State<'_, DataState>) -> PipelineState {
    data.pipeline.state()
}
