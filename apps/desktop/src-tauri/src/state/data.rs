//! # Data State
//!
//! Holds the long-lived data-layer services shared by commands:
//! the reminder store, the checkout pipeline, and the dashboard
//! aggregator. All three are cheap to clone or use internal `Arc`s,
//! so this struct is just a bundle handed to `app.manage()`.

use std::sync::Arc;

use ovro_data::{
    CheckoutPipeline, DashboardAggregator, DashboardFeed, ReminderStore, SaleProcessor,
};

/// Tauri-managed data services.
pub struct DataState {
    /// Blob-backed reminder store
    pub reminders: ReminderStore,

    /// Sale completion pipeline
    pub pipeline: CheckoutPipeline,

    /// Dashboard read-side aggregator
    pub dashboard: DashboardAggregator,
}

impl DataState {
    /// Wires the data services around a shared reminder store.
    pub fn new(
        reminders: ReminderStore,
        processor: Arc<dyn SaleProcessor>,
        feed: Arc<dyn DashboardFeed>,
    ) -> Self {
        DataState {
            pipeline: CheckoutPipeline::new(processor, reminders.clone()),
            dashboard: DashboardAggregator::new(feed, reminders.clone()),
            reminders,
        }
    }
}
