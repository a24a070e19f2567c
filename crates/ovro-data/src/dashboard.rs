//! # Dashboard Aggregator
//!
//! Read-only composition of the dashboard feed and the reminder store
//! into one summary the owner screen renders in a single pass.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Dashboard Aggregator                                │
//! │                                                                         │
//! │  DashboardFeed ──► stats, transactions, top items, partner splits      │
//! │        │                                    │                           │
//! │        └── today figures ──► DayMetrics ────┤                           │
//! │                                             ▼                           │
//! │  ReminderStore ──► due / pending ──► DashboardSummary                  │
//! │                                                                         │
//! │  Strictly read-only: the aggregator never mutates the reminder store;  │
//! │  complete/snooze actions go through the store directly.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ovro_core::metrics::{calculate_metrics, DayMetrics};
use ovro_core::types::{PartnerSplit, Reminder, Stat, TopItem, Transaction};

use crate::error::DataResult;
use crate::providers::DashboardFeed;
use crate::reminders::ReminderStore;

// =============================================================================
// Summary
// =============================================================================

/// Everything the owner dashboard shows, fetched in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Headline statistic cards.
    pub stats: Vec<Stat>,

    /// Recent transactions, newest first.
    pub transactions: Vec<Transaction>,

    /// Best sellers.
    pub top_items: Vec<TopItem>,

    /// Partner profit splits for today.
    pub partner_splits: Vec<PartnerSplit>,

    /// Derived profit-margin / expense-ratio figures.
    pub metrics: DayMetrics,

    /// Reminders due as of the requested day.
    pub due_reminders: Vec<Reminder>,

    /// Count of all pending reminders (due or not), for the badge.
    pub pending_reminder_count: usize,
}

// =============================================================================
// Aggregator
// =============================================================================

/// Assembles the dashboard summary from its two read-only sources.
#[derive(Clone)]
pub struct DashboardAggregator {
    feed: Arc<dyn DashboardFeed>,
    reminders: ReminderStore,
}

impl DashboardAggregator {
    pub fn new(feed: Arc<dyn DashboardFeed>, reminders: ReminderStore) -> Self {
        DashboardAggregator { feed, reminders }
    }

    /// Builds the full dashboard view for `today`.
    ///
    /// The due list is re-evaluated on every call; nothing is cached.
    pub async fn summary(&self, today: NaiveDate) -> DataResult<DashboardSummary> {
        let stats = self.feed.fetch_stats().await?;
        let transactions = self.feed.fetch_recent_transactions().await?;
        let top_items = self.feed.fetch_top_items().await?;
        let partner_splits = self.feed.fetch_partner_splits().await?;
        let figures = self.feed.fetch_today_figures().await?;

        let metrics = calculate_metrics(
            figures.sales_poisha / 100,
            figures.profit_poisha / 100,
            figures.expenses_poisha / 100,
        );

        let all = self.reminders.load_all();
        let pending_reminder_count = all
            .iter()
            .filter(|r| r.status == ovro_core::types::ReminderStatus::Pending)
            .count();
        let due_reminders = all.into_iter().filter(|r| r.is_due(today)).collect::<Vec<_>>();

        debug!(
            due = due_reminders.len(),
            pending = pending_reminder_count,
            "Dashboard summary assembled"
        );

        Ok(DashboardSummary {
            stats,
            transactions,
            top_items,
            partner_splits,
            metrics,
            due_reminders,
            pending_reminder_count,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use crate::providers::MockDashboardFeed;
    use ovro_core::types::ReminderStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(id: &str, due: NaiveDate, status: ReminderStatus) -> Reminder {
        Reminder {
            id: id.to_string(),
            client_name: "Rahim".to_string(),
            client_phone: "01712345678".to_string(),
            product: "Engine Oil (Shell Advance)".to_string(),
            sale_date: date(2026, 1, 1),
            due_date: due,
            status,
        }
    }

    #[tokio::test]
    async fn test_summary_combines_feed_and_reminders() {
        let reminders = ReminderStore::new(Arc::new(MemoryStore::new()));
        reminders
            .save_all(&[
                reminder("due", date(2026, 3, 1), ReminderStatus::Pending),
                reminder("future", date(2026, 6, 1), ReminderStatus::Pending),
                reminder("done", date(2026, 3, 1), ReminderStatus::Completed),
            ])
            .unwrap();

        let aggregator = DashboardAggregator::new(Arc::new(MockDashboardFeed), reminders);
        let summary = aggregator.summary(date(2026, 3, 10)).await.unwrap();

        assert_eq!(summary.stats.len(), 4);
        assert_eq!(summary.transactions.len(), 7);
        assert_eq!(summary.top_items.len(), 5);
        assert_eq!(summary.partner_splits.len(), 2);

        // ৳4200 profit on ৳12450 sales, ৳1500 expenses
        assert_eq!(summary.metrics.profit_margin, "33.7");
        assert_eq!(summary.metrics.expense_ratio, "12.0");

        assert_eq!(summary.due_reminders.len(), 1);
        assert_eq!(summary.due_reminders[0].id, "due");
        assert_eq!(summary.pending_reminder_count, 2);
    }

    #[tokio::test]
    async fn test_summary_with_empty_store() {
        let aggregator = DashboardAggregator::new(
            Arc::new(MockDashboardFeed),
            ReminderStore::new(Arc::new(MemoryStore::new())),
        );
        let summary = aggregator.summary(date(2026, 3, 10)).await.unwrap();
        assert!(summary.due_reminders.is_empty());
        assert_eq!(summary.pending_reminder_count, 0);
    }
}
