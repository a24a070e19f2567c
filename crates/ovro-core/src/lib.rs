//! # ovro-core: Pure Business Logic for Ovro POS
//!
//! This crate is the **heart** of Ovro POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ovro POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout UI ──► Dashboard UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    add_to_cart, complete_sale, snooze_reminder, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ovro-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ followup  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │ Reminder  │  │ Discount  │  │ CartLine  │  │   scan    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ovro-data (Data Layer)                       │   │
//! │  │         Blob store, reminder store, providers, pipeline         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Reminder, CheckoutDetails, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart engine with totals breakdown
//! - [`followup`] - Keyword rules mapping sold items to reminders
//! - [`metrics`] - Dashboard-derived ratios
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation and lenient input parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in poisha (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ovro_core::money::{DiscountRate, Money};
//! use ovro_core::cart::Cart;
//! use ovro_core::types::Product;
//!
//! let oil = Product {
//!     id: "1".to_string(),
//!     name: "Engine Oil (Shell Advance)".to_string(),
//!     category: "Lubricants".to_string(),
//!     price_poisha: 55_000, // ৳550
//!     buy_price_poisha: 42_000,
//!     stock: 50,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_product(&oil);
//! cart.add_product(&oil);
//!
//! // ৳1100 subtotal, 10% discount, ৳100 service charge = ৳1090 total
//! let totals = cart.totals(DiscountRate::from_percentage(10.0), Money::from_taka(100));
//! assert_eq!(totals.total(), Money::from_taka(1090));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod followup;
pub mod metrics;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ovro_core::Money` instead of
// `use ovro_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use types::*;
