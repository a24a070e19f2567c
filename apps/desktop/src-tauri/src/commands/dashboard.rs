//! # Dashboard Commands
//!
//! One command returning the whole dashboard view in a single call,
//! so the frontend never stitches together five separate fetches.

use chrono::Local;
use tauri::State;
use tracing::debug;

use ovro_data::DashboardSummary;

use crate::error::ApiError;
use crate::state::DataState;

/// Builds the full dashboard summary: stat cards, recent transactions,
/// top items, partner splits, derived metrics, and due reminders.
#[tauri::command]
pub async fn get_dashboard(data: State<'_, DataState>) -> Result<DashboardSummary, ApiError> {
    debug!("get_dashboard command");

    let today = Local::now().date_naive();
    Ok(data.dashboard.summary(today).await?)
}
