//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can exercise individual states in isolation
//! 3. **Finer-Grained Locking**: Cart edits never contend with catalog edits
//!
//! - [`CartState`]: the live cart plus held orders
//! - [`CatalogState`]: the in-memory product catalog
//! - [`DataState`]: reminder store, checkout pipeline, dashboard aggregator

pub mod cart;
pub mod catalog;
pub mod data;

pub use cart::{CartState, HeldOrder};
pub use catalog::{CatalogState, ProductUpdate};
pub use data::DataState;
