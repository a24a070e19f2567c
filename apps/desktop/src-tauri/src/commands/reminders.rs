//! # Reminder Commands
//!
//! Follow-up reminder queries and actions.
//!
//! Reminders are created automatically by the checkout pipeline; these
//! commands only read them and move them through their lifecycle
//! (pending → completed, or pushed out by snoozing).

use chrono::Local;
use tauri::State;
use tracing::{debug, info};

use ovro_core::Reminder;

use crate::error::ApiError;
use crate::state::DataState;

/// Returns every stored reminder, newest last.
#[tauri::command]
pub fn get_reminders(data: State<'_, DataState>) -> Vec<Reminder> {
    debug!("get_reminders command");
    data.reminders.load_all()
}

/// Returns reminders that are due today or overdue.
#[tauri::command]
pub fn get_due_reminders(data: State<'_, DataState>) -> Vec<Reminder> {
    debug!("get_due_reminders command");
    data.reminders.due(Local::now().date_naive())
}

/// Marks a reminder as completed.
///
/// Completed reminders stay in the store as service history; they
/// simply stop appearing in the due list.
#[tauri::command]
pub fn mark_reminder_complete(
    data: State<'_, DataState>,
    reminder_id: String,
) -> Result<(), ApiError> {
    debug!(reminder_id = %reminder_id, "mark_reminder_complete command");

    data.reminders.mark_complete(&reminder_id)?;
    info!(reminder_id = %reminder_id, "Reminder completed");
    Ok(())
}

/// Pushes a reminder's due date out by the given number of days
/// from today. The reminder stays pending so it resurfaces.
///
/// ## Arguments
/// * `reminder_id` - Reminder to snooze
/// * `days` - Days from today until it is due again
#[tauri::command]
pub fn snooze_reminder(
    data: State<'_, DataState>,
    reminder_id: String,
    days: i64,
) -> Result<(), ApiError> {
    debug!(reminder_id = %reminder_id, days, "snooze_reminder command");

    data.reminders
        .snooze(&reminder_id, Local::now().date_naive(), days)?;
    info!(reminder_id = %reminder_id, days, "Reminder snoozed");
    Ok(())
}
