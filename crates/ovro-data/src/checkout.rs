//! # Checkout Pipeline
//!
//! Orchestrates sale completion: submit the cart to the sale processor,
//! derive follow-up reminders from sold items, persist them.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sale Completion Pipeline                            │
//! │                                                                         │
//! │              complete_sale(lines, details)                              │
//! │                        │                                                │
//! │     ┌──────┐  submit   ▼              ┌──────────────┐                 │
//! │     │ Idle │──────► Submitting ──────►│ FollowupScan │                 │
//! │     └──────┘           │              └──────┬───────┘                 │
//! │        ▲               │ processor           │ append reminders        │
//! │        │               │ rejects             ▼                         │
//! │        │               │              ┌───────────┐                    │
//! │        ├───────────────┘              │ Persisted │                    │
//! │        │      cart preserved,         └─────┬─────┘                    │
//! │        │      user retries manually         │ receipt returned         │
//! │        └────────────────────────────────────┘                          │
//! │                                                                         │
//! │  One sale at a time: a second checkout while Submitting is rejected    │
//! │  with SaleInProgress. In-flight submissions cannot be cancelled.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline never touches the live cart; the caller clears it only
//! after a successful receipt comes back.

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use ovro_core::cart::{Cart, CartLine, CartTotals};
use ovro_core::followup;
use ovro_core::types::CheckoutDetails;

use crate::error::{DataError, DataResult};
use crate::providers::{SaleProcessor, SaleSubmission};
use crate::reminders::ReminderStore;

// =============================================================================
// Pipeline State
// =============================================================================

/// Where the pipeline currently is. Observable for UI busy indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineState {
    /// No sale in flight.
    Idle,
    /// Waiting on the sale processor.
    Submitting,
    /// Deriving follow-up reminders from the sold lines.
    FollowupScan,
    /// Reminders persisted; receipt about to be returned.
    Persisted,
}

// =============================================================================
// Receipt
// =============================================================================

/// What the counter gets back from a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceipt {
    /// Human-readable order number, e.g. "260115-143022-0042".
    pub order_id: String,

    /// Confirmation message from the sale processor.
    pub message: String,

    /// Totals breakdown as charged.
    pub totals: CartTotals,

    /// How many follow-up reminders this sale scheduled.
    pub reminders_scheduled: usize,
}

/// Generates an order number from the wall clock.
///
/// Format: `YYMMDD-HHMMSS-NNNN` where NNNN comes from the nanosecond
/// field, enough to keep two sales in the same second distinct.
pub fn generate_order_id() -> String {
    let now = Local::now();
    let nanos = now.timestamp_subsec_nanos() as u64;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), nanos % 10000)
}

// =============================================================================
// Pipeline
// =============================================================================

/// The sale-completion pipeline.
///
/// Owns the Submitting/Idle guard; the reminder store and sale processor
/// are shared collaborators.
pub struct CheckoutPipeline {
    processor: Arc<dyn SaleProcessor>,
    reminders: ReminderStore,
    state: Mutex<PipelineState>,
}

impl CheckoutPipeline {
    pub fn new(processor: Arc<dyn SaleProcessor>, reminders: ReminderStore) -> Self {
        CheckoutPipeline {
            processor,
            reminders,
            state: Mutex::new(PipelineState::Idle),
        }
    }

    /// Returns the current pipeline state.
    pub fn state(&self) -> PipelineState {
        *self.lock_state()
    }

    /// Runs one sale through the pipeline.
    ///
    /// On processor rejection or persistence failure the pipeline returns
    /// to `Idle` with the error; nothing is retried automatically and the
    /// caller keeps its cart so the user can re-click checkout.
    pub async fn complete_sale(
        &self,
        lines: Vec<CartLine>,
        details: CheckoutDetails,
        today: NaiveDate,
    ) -> DataResult<SaleReceipt> {
        if lines.is_empty() {
            return Err(DataError::EmptyCart);
        }
        self.enter_submitting()?;

        let totals = Cart { lines: lines.clone() }.totals(details.discount, details.service_charge());
        let submission = SaleSubmission {
            lines,
            details,
            totals,
            sale_date: today,
        };

        debug!(total = %totals.total(), "Submitting sale");
        let confirmation = match self.processor.submit(&submission).await {
            Ok(confirmation) => confirmation,
            Err(e) => {
                warn!(error = %e, "Sale submission failed, returning to idle");
                self.set_state(PipelineState::Idle);
                return Err(e);
            }
        };

        self.set_state(PipelineState::FollowupScan);
        let new_reminders =
            followup::scan_sold_lines(&submission.lines, &submission.details, today);
        debug!(count = new_reminders.len(), "Follow-up scan complete");

        let reminders_scheduled = new_reminders.len();
        if let Err(e) = self.reminders.append(new_reminders) {
            warn!(error = %e, "Failed to persist reminders, returning to idle");
            self.set_state(PipelineState::Idle);
            return Err(e);
        }
        self.set_state(PipelineState::Persisted);

        let order_id = generate_order_id();
        info!(%order_id, reminders_scheduled, "Sale completed");
        self.set_state(PipelineState::Idle);

        Ok(SaleReceipt {
            order_id,
            message: confirmation.message,
            totals,
            reminders_scheduled,
        })
    }

    fn enter_submitting(&self) -> DataResult<()> {
        let mut state = self.lock_state();
        if *state != PipelineState::Idle {
            return Err(DataError::SaleInProgress);
        }
        *state = PipelineState::Submitting;
        Ok(())
    }

    fn set_state(&self, next: PipelineState) {
        *self.lock_state() = next;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PipelineState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use crate::providers::{MockSaleProcessor, SaleConfirmation};
    use async_trait::async_trait;
    use ovro_core::money::{DiscountRate, Money};
    use ovro_core::types::{PaymentMethod, Product};

    struct RejectingProcessor;

    #[async_trait]
    impl SaleProcessor for RejectingProcessor {
        async fn submit(&self, _submission: &SaleSubmission) -> DataResult<SaleConfirmation> {
            Err(DataError::SaleRejected("backend unavailable".to_string()))
        }
    }

    fn pipeline_with(processor: Arc<dyn SaleProcessor>) -> CheckoutPipeline {
        let reminders = ReminderStore::new(Arc::new(MemoryStore::new()));
        CheckoutPipeline::new(processor, reminders)
    }

    fn oil_line() -> CartLine {
        CartLine::from_product(&Product {
            id: "1".to_string(),
            name: "Engine Oil (Shell Advance)".to_string(),
            category: "Lubricants".to_string(),
            price_poisha: 55_000,
            buy_price_poisha: 42_000,
            stock: 50,
        })
    }

    fn details(name: &str, phone: &str) -> CheckoutDetails {
        CheckoutDetails {
            client_name: name.to_string(),
            client_phone: phone.to_string(),
            client_odo: String::new(),
            service_charge_poisha: Money::from_taka(100).poisha(),
            payment_method: PaymentMethod::Cash,
            discount: DiscountRate::from_percentage(10.0),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_successful_sale_schedules_reminders() {
        let reminders = ReminderStore::new(Arc::new(MemoryStore::new()));
        let pipeline =
            CheckoutPipeline::new(Arc::new(MockSaleProcessor), reminders.clone());

        let mut line = oil_line();
        line.quantity = 2;
        let today = date(2026, 1, 15);

        let receipt = pipeline
            .complete_sale(vec![line], details("Rahim", "01712345678"), today)
            .await
            .unwrap();

        assert_eq!(receipt.message, "Sale processed successfully!");
        assert_eq!(receipt.reminders_scheduled, 1);
        // ৳1100 - 10% + ৳100 service charge
        assert_eq!(receipt.totals.total(), Money::from_taka(1090));

        let persisted = reminders.load_all();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].due_date, date(2026, 3, 16));
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_sale_without_contact_schedules_nothing() {
        let reminders = ReminderStore::new(Arc::new(MemoryStore::new()));
        let pipeline =
            CheckoutPipeline::new(Arc::new(MockSaleProcessor), reminders.clone());

        let receipt = pipeline
            .complete_sale(vec![oil_line()], details("", "01712345678"), date(2026, 1, 15))
            .await
            .unwrap();

        assert_eq!(receipt.reminders_scheduled, 0);
        assert!(reminders.load_all().is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let pipeline = pipeline_with(Arc::new(MockSaleProcessor));
        let err = pipeline
            .complete_sale(Vec::new(), details("Rahim", "017"), date(2026, 1, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::EmptyCart));
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_rejected_sale_returns_to_idle_without_reminders() {
        let reminders = ReminderStore::new(Arc::new(MemoryStore::new()));
        let pipeline = CheckoutPipeline::new(Arc::new(RejectingProcessor), reminders.clone());

        let err = pipeline
            .complete_sale(vec![oil_line()], details("Rahim", "017"), date(2026, 1, 15))
            .await
            .unwrap_err();

        assert!(matches!(err, DataError::SaleRejected(_)));
        assert!(reminders.load_all().is_empty());
        // Pipeline is retryable after a rejection
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[test]
    fn test_order_id_shape() {
        let id = generate_order_id();
        // YYMMDD-HHMMSS-NNNN
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 6);
        assert_eq!(parts[1].len(), 6);
        assert_eq!(parts[2].len(), 4);
    }
}
