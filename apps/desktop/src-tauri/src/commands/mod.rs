//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── app.rs        ◄─── Shell-level (version)
//! ├── catalog.rs    ◄─── Catalog browsing, manual items, inventory edits
//! ├── cart.rs       ◄─── Cart manipulation, hold/recall, totals preview
//! ├── checkout.rs   ◄─── Sale completion pipeline
//! ├── dashboard.rs  ◄─── Dashboard summary
//! └── reminders.rs  ◄─── Follow-up reminder queries and actions
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const receipt = await invoke('complete_sale', {                        │
//! │    details: { clientName: '...', paymentMethod: 'Cash', ... }           │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn complete_sale(                                                │
//! │      cart: State<'_, CartState>,  ◄── Injected by Tauri                │
//! │      data: State<'_, DataState>,  ◄── Injected by Tauri                │
//! │      details: CheckoutDetails,    ◄── From invoke params               │
//! │  ) -> Result<SaleReceipt, ApiError>                                     │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: SaleReceipt                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn get_products(catalog: State<'_, CatalogState>)
//!
//! // Only needs the cart
//! fn get_cart(cart: State<'_, CartState>)
//!
//! // Needs both
//! fn add_to_cart(catalog: State<'_, CatalogState>, cart: State<'_, CartState>, ...)
//! ```

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod reminders;
