//! # ovro-data: Data Layer for Ovro POS
//!
//! This crate provides persistence and collaborator access for the Ovro
//! POS system. Storage is a file-backed blob store; the catalog and
//! dashboard come from injected providers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ovro POS Data Flow                               │
//! │                                                                         │
//! │  Tauri Command (complete_sale, get_dashboard, ...)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     ovro-data (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌─────────────────┐  │   │
//! │  │   │  providers   │   │   checkout    │   │    dashboard    │  │   │
//! │  │   │ CatalogSource│   │ Checkout-     │   │ Dashboard-      │  │   │
//! │  │   │ SaleProcessor│◄──│ Pipeline      │   │ Aggregator      │  │   │
//! │  │   │ DashboardFeed│   └───────┬───────┘   └────────┬────────┘  │   │
//! │  │   └──────────────┘           │                    │           │   │
//! │  │                              ▼                    ▼           │   │
//! │  │   ┌──────────────┐   ┌─────────────────────────────────────┐ │   │
//! │  │   │    blob      │◄──│           reminders                 │ │   │
//! │  │   │  BlobStore   │   │  ReminderStore ("ovro_reminders")   │ │   │
//! │  │   └──────────────┘   └─────────────────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     App Data Directory                          │   │
//! │  │   ~/.local/share/com.ovro.pos/ovro_reminders.json              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`blob`] - Single-slot blob store (file-backed and in-memory)
//! - [`reminders`] - The persisted follow-up reminder collection
//! - [`providers`] - Catalog / sale / dashboard seams and their mocks
//! - [`checkout`] - The sale-completion pipeline
//! - [`dashboard`] - Read-only dashboard aggregation
//! - [`error`] - Data layer error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ovro_data::{CheckoutPipeline, FileStore, MockSaleProcessor, ReminderStore};
//!
//! let blobs = Arc::new(FileStore::new(data_dir)?);
//! let reminders = ReminderStore::new(blobs);
//! let pipeline = CheckoutPipeline::new(Arc::new(MockSaleProcessor), reminders.clone());
//!
//! let receipt = pipeline.complete_sale(lines, details, today).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod blob;
pub mod checkout;
pub mod dashboard;
pub mod error;
pub mod providers;
pub mod reminders;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DataError, DataResult};

pub use blob::{BlobStore, FileStore, MemoryStore};
pub use checkout::{CheckoutPipeline, PipelineState, SaleReceipt};
pub use dashboard::{DashboardAggregator, DashboardSummary};
pub use providers::{
    CatalogSource, DashboardFeed, MockCatalog, MockDashboardFeed, MockSaleProcessor,
    SaleConfirmation, SaleProcessor, SaleSubmission,
};
pub use reminders::{ReminderStore, REMINDER_SLOT};
