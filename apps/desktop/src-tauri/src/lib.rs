//! # Ovro Desktop Library
//!
//! Core library for the Ovro POS desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! ovro_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Live cart + held orders
//! │   ├── catalog.rs  ◄─── In-memory product catalog
//! │   └── data.rs     ◄─── Reminder store / pipeline / dashboard
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── app.rs      ◄─── Shell-level commands
//! │   ├── catalog.rs  ◄─── Catalog and inventory commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Sale completion
//! │   ├── dashboard.rs◄─── Dashboard summary
//! │   └── reminders.rs◄─── Reminder queries and actions
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   CatalogState   │ │    CartState     │ │     DataState        │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Product list  │ │  • Live cart     │ │  • Reminder store    │   │
//! │  │  • Manual items  │ │  • Held orders   │ │  • Checkout pipeline │   │
//! │  │                  │ │                  │ │  • Dashboard agg.    │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tauri::Manager;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use ovro_data::{CatalogSource, FileStore, MockCatalog, MockDashboardFeed, MockSaleProcessor, ReminderStore};
use state::{CartState, CatalogState, DataState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Data Directory ─────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.ovro.pos/                │
/// │     • Windows: %APPDATA%/ovro/pos/                                      │
/// │     • Linux: ~/.local/share/ovro-pos/                                   │
/// │                                                                         │
/// │  3. Open Blob Store ──────────────────────────────────────────────────► │
/// │     • One JSON file per slot under the data directory                   │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: seeded from the catalog source                      │
/// │     • CartState: empty cart, no held orders                             │
/// │     • DataState: reminder store + pipeline + dashboard aggregator       │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Ovro POS Desktop Application");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let data_dir = get_data_dir()?;
            info!(?data_dir, "Data directory determined");

            let blobs = Arc::new(FileStore::new(&data_dir)?);
            let reminders = ReminderStore::new(blobs);

            // Seed the catalog (blocking in setup, async in runtime)
            let catalog_state = CatalogState::new();
            match tauri::async_runtime::block_on(MockCatalog.fetch_products()) {
                Ok(products) => catalog_state.replace_all(products),
                Err(e) => warn!(error = %e, "Catalog fetch failed, starting empty"),
            }

            let cart_state = CartState::new();
            let data_state = DataState::new(
                reminders,
                Arc::new(MockSaleProcessor),
                Arc::new(MockDashboardFeed),
            );

            app.manage(catalog_state);
            app.manage(cart_state);
            app.manage(data_state);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::get_products,
            commands::catalog::add_manual_item,
            commands::catalog::update_product,
            commands::catalog::delete_product,
            // Cart commands
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::adjust_quantity,
            commands::cart::set_line_price,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            commands::cart::preview_totals,
            commands::cart::hold_order,
            commands::cart::recall_order,
            commands::cart::get_held_orders,
            // Checkout commands
            commands::checkout::complete_sale,
            commands::checkout::get_pipeline_state,
            // Reminder commands
            commands::reminders::get_reminders,
            commands::reminders::get_due_reminders,
            commands::reminders::mark_reminder_complete,
            commands::reminders::snooze_reminder,
            // Dashboard commands
            commands::dashboard::get_dashboard,
            // App commands
            commands::app::get_app_version,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ovro=trace` - Show trace for ovro crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ovro=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the blob store directory based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.ovro.pos/`
/// - **Windows**: `%APPDATA%\ovro\pos\`
/// - **Linux**: `~/.local/share/ovro-pos/`
///
/// ## Development Override
/// Set `OVRO_DATA_DIR` environment variable to use a custom path.
fn get_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("OVRO_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "ovro", "pos")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.to_path_buf())
}
