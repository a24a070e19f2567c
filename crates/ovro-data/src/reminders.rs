//! # Reminder Store
//!
//! Persistence for follow-up reminders, layered over the blob store.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Reminder Store                                     │
//! │                                                                         │
//! │  Slot "ovro_reminders" holds ONE JSON array of Reminder records:       │
//! │                                                                         │
//! │  [ { "id": "...", "clientName": "Rahim", "clientPhone": "017...",      │
//! │      "product": "Engine Oil (Shell Advance)",                          │
//! │      "saleDate": "2026-01-15", "dueDate": "2026-03-16",                │
//! │      "status": "pending" }, ... ]                                       │
//! │                                                                         │
//! │  Every mutation is read-modify-write over the whole array; there is    │
//! │  no partial merge. Reminders are appended and mutated, never deleted.  │
//! │                                                                         │
//! │  Read policy:  absent or unparsable blob → empty list (never an error)│
//! │  Write policy: failures surface as DataError                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use ovro_core::types::Reminder;

use crate::blob::BlobStore;
use crate::error::{DataError, DataResult};

/// Blob slot name holding the serialized reminder array.
pub const REMINDER_SLOT: &str = "ovro_reminders";

// =============================================================================
// Store
// =============================================================================

/// The persisted collection of follow-up reminders.
///
/// Exclusively owns the reminder records; the dashboard only reads them
/// through this store's accessors.
#[derive(Clone)]
pub struct ReminderStore {
    blobs: Arc<dyn BlobStore>,
}

impl ReminderStore {
    /// Creates a reminder store over the given blob store.
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        ReminderStore { blobs }
    }

    /// Loads every persisted reminder.
    ///
    /// An absent slot and an unparsable blob are both reported as an
    /// empty collection rather than an error; corruption costs the stored
    /// history but never blocks the dashboard.
    pub fn load_all(&self) -> Vec<Reminder> {
        let Some(bytes) = self.blobs.get(REMINDER_SLOT) else {
            return Vec::new();
        };
        match serde_json::from_slice(&bytes) {
            Ok(reminders) => reminders,
            Err(e) => {
                warn!(error = %e, "Reminder blob unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the entire persisted collection.
    pub fn save_all(&self, reminders: &[Reminder]) -> DataResult<()> {
        let bytes =
            serde_json::to_vec(reminders).map_err(|source| DataError::SerializeFailed {
                slot: REMINDER_SLOT.to_string(),
                source,
            })?;
        self.blobs.put(REMINDER_SLOT, &bytes)?;
        debug!(count = reminders.len(), "Reminder collection saved");
        Ok(())
    }

    /// Appends newly created reminders to the persisted collection.
    pub fn append(&self, new_reminders: Vec<Reminder>) -> DataResult<()> {
        if new_reminders.is_empty() {
            return Ok(());
        }
        let mut all = self.load_all();
        let added = new_reminders.len();
        all.extend(new_reminders);
        self.save_all(&all)?;
        info!(added, total = all.len(), "Follow-up reminders scheduled");
        Ok(())
    }

    /// Returns the reminders due as of `today`: pending, with a due date
    /// that has arrived or passed. Re-evaluated on every call.
    pub fn due(&self, today: NaiveDate) -> Vec<Reminder> {
        self.load_all()
            .into_iter()
            .filter(|r| r.is_due(today))
            .collect()
    }

    /// Marks a reminder completed and persists the change.
    pub fn mark_complete(&self, id: &str) -> DataResult<()> {
        self.mutate(id, |r| r.complete())
    }

    /// Pushes a reminder's due date to `today + days` and persists the
    /// change. The reminder stays pending so it resurfaces later.
    pub fn snooze(&self, id: &str, today: NaiveDate, days: i64) -> DataResult<()> {
        self.mutate(id, |r| r.snooze(today, days))
    }

    fn mutate(&self, id: &str, op: impl FnOnce(&mut Reminder)) -> DataResult<()> {
        let mut all = self.load_all();
        let Some(reminder) = all.iter_mut().find(|r| r.id == id) else {
            return Err(DataError::not_found("Reminder", id));
        };
        op(reminder);
        self.save_all(&all)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use ovro_core::types::ReminderStatus;

    fn store() -> ReminderStore {
        ReminderStore::new(Arc::new(MemoryStore::new()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(id: &str, due: NaiveDate) -> Reminder {
        Reminder {
            id: id.to_string(),
            client_name: "Rahim".to_string(),
            client_phone: "01712345678".to_string(),
            product: "Engine Oil (Shell Advance)".to_string(),
            sale_date: due - chrono::Duration::days(60),
            due_date: due,
            status: ReminderStatus::Pending,
        }
    }

    #[test]
    fn test_empty_store_loads_empty() {
        assert!(store().load_all().is_empty());
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let blobs = Arc::new(MemoryStore::new());
        blobs.put(REMINDER_SLOT, b"{not json").unwrap();
        let store = ReminderStore::new(blobs);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_append_accumulates() {
        let store = store();
        store.append(vec![reminder("a", date(2026, 3, 1))]).unwrap();
        store.append(vec![reminder("b", date(2026, 4, 1))]).unwrap();

        let all = store.load_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }

    #[test]
    fn test_due_filters_by_status_and_date() {
        let store = store();
        let today = date(2026, 3, 10);
        let mut completed = reminder("done", date(2026, 3, 1));
        completed.complete();
        store
            .save_all(&[
                reminder("past", date(2026, 3, 1)),
                reminder("today", today),
                reminder("future", date(2026, 4, 1)),
                completed,
            ])
            .unwrap();

        let due: Vec<String> = store.due(today).into_iter().map(|r| r.id).collect();
        assert_eq!(due, vec!["past", "today"]);
    }

    #[test]
    fn test_mark_complete_removes_from_due_view() {
        let store = store();
        let today = date(2026, 3, 10);
        store.save_all(&[reminder("a", date(2026, 3, 1))]).unwrap();

        store.mark_complete("a").unwrap();

        // Past-dated but completed; never shown as due again
        assert!(store.due(today).is_empty());
        assert_eq!(store.load_all()[0].status, ReminderStatus::Completed);
    }

    #[test]
    fn test_snooze_is_relative_to_today() {
        let store = store();
        let today = date(2026, 3, 10);
        // Due yesterday; snoozing by 7 makes it due 7 days from today
        store.save_all(&[reminder("a", date(2026, 3, 9))]).unwrap();

        store.snooze("a", today, 7).unwrap();

        let all = store.load_all();
        assert_eq!(all[0].due_date, date(2026, 3, 17));
        assert_eq!(all[0].status, ReminderStatus::Pending);
        assert!(store.due(today).is_empty());
    }

    #[test]
    fn test_mutating_unknown_id_errors() {
        let err = store().mark_complete("missing").unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
    }

    #[test]
    fn test_blob_uses_camel_case_field_names() {
        let blobs = Arc::new(MemoryStore::new());
        let store = ReminderStore::new(Arc::clone(&blobs) as Arc<dyn BlobStore>);
        store.save_all(&[reminder("a", date(2026, 3, 1))]).unwrap();

        let raw = String::from_utf8(blobs.get(REMINDER_SLOT).unwrap()).unwrap();
        assert!(raw.contains("\"clientName\""));
        assert!(raw.contains("\"dueDate\":\"2026-03-01\""));
        assert!(raw.contains("\"status\":\"pending\""));
    }
}
