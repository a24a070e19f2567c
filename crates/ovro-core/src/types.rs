//! # Domain Types
//!
//! Core domain types used throughout Ovro POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ CheckoutDetails │   │    Reminder     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  client_name    │   │  id (UUID)      │       │
//! │  │  name           │   │  client_phone   │   │  client_name    │       │
//! │  │  category       │   │  client_odo     │   │  product        │       │
//! │  │  price_poisha   │   │  service_charge │   │  sale_date      │       │
//! │  │  buy_price      │   │  payment_method │   │  due_date       │       │
//! │  │  stock          │   │  discount       │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │ PaymentMethod   │   │  Dashboard read models                   │    │
//! │  │  Cash           │   │  Stat / Transaction / TopItem /          │    │
//! │  │  Bkash          │   │  PartnerSplit / TodayFigures             │    │
//! │  │  Card           │   │  (mock-backed, read-only views)          │    │
//! │  └─────────────────┘   └──────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization Contract
//! Everything here crosses the IPC boundary as camelCase JSON. `Reminder`
//! additionally defines the persisted blob format: camelCase field names,
//! lowercase status values, dates as `YYYY-MM-DD`. Changing these renames
//! breaks existing blobs.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{DiscountRate, Money};

// =============================================================================
// Product
// =============================================================================

/// Stock level assigned to manual items and services (effectively unlimited;
/// the POS never decrements stock on sale).
pub const MANUAL_ITEM_STOCK: i64 = 999;

/// Category assigned to manually entered items.
pub const MANUAL_ITEM_CATEGORY: &str = "Parts";

/// A sellable product or workshop service.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier. Seeded catalog entries use short numeric ids,
    /// manual items use a generated `manual-<uuid>` id.
    pub id: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Category for catalog browsing (e.g. "Lubricants", "Service").
    pub category: String,

    /// Sell price in poisha.
    pub price_poisha: i64,

    /// Cost price in poisha (for profit margin calculations).
    pub buy_price_poisha: i64,

    /// Current stock level. Informational only: the sale pipeline never
    /// decrements it, and services carry a sentinel of 999.
    pub stock: i64,
}

impl Product {
    /// Returns the sell price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_poisha(self.price_poisha)
    }

    /// Returns the cost price as Money.
    #[inline]
    pub fn buy_price(&self) -> Money {
        Money::from_poisha(self.buy_price_poisha)
    }

    /// Returns the margin per unit (sell price minus cost price).
    #[inline]
    pub fn margin(&self) -> Money {
        self.price() - self.buy_price()
    }

    /// Creates a manually entered item (parts not on the seeded catalog).
    ///
    /// ## Example
    /// ```rust
    /// use ovro_core::money::Money;
    /// use ovro_core::types::Product;
    ///
    /// let item = Product::manual("Gear Lever", Money::from_taka(320), Money::from_taka(200));
    /// assert!(item.id.starts_with("manual-"));
    /// assert_eq!(item.category, "Parts");
    /// ```
    pub fn manual(name: impl Into<String>, price: Money, buy_price: Money) -> Self {
        Product {
            id: format!("manual-{}", Uuid::new_v4()),
            name: name.into(),
            category: MANUAL_ITEM_CATEGORY.to_string(),
            price_poisha: price.poisha(),
            buy_price_poisha: buy_price.poisha(),
            stock: MANUAL_ITEM_STOCK,
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// bKash mobile payment.
    #[serde(rename = "bKash")]
    Bkash,
    /// Card payment on an external terminal.
    Card,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Checkout Details
// =============================================================================

/// Transient checkout input, created fresh per checkout attempt and
/// discarded after the receipt is closed.
///
/// The discount is carried as a percentage rate; the absolute amount is
/// derived from the cart subtotal at submission time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutDetails {
    /// Client name (optional; enables follow-up reminders).
    pub client_name: String,

    /// Client phone (optional; enables follow-up reminders).
    pub client_phone: String,

    /// Odometer reading noted at the counter (free text).
    pub client_odo: String,

    /// Workshop service charge in poisha, added after the discount.
    pub service_charge_poisha: i64,

    /// Payment method selected at the counter.
    #[serde(default)]
    pub payment_method: PaymentMethod,

    /// Discount percentage applied to the subtotal.
    #[serde(default)]
    pub discount: DiscountRate,
}

impl CheckoutDetails {
    /// Returns the service charge as Money.
    #[inline]
    pub fn service_charge(&self) -> Money {
        Money::from_poisha(self.service_charge_poisha)
    }

    /// Follow-up reminders are only created when both contact fields are
    /// filled in (whitespace-only input counts as empty).
    pub fn has_client_contact(&self) -> bool {
        !self.client_name.trim().is_empty() && !self.client_phone.trim().is_empty()
    }
}

// =============================================================================
// Reminder
// =============================================================================

/// Lifecycle status of a follow-up reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ReminderStatus {
    /// Awaiting client contact; shows up in the due list once the date
    /// arrives.
    Pending,
    /// Client has been contacted; never shown as due again.
    Completed,
    /// Legacy status value present in older persisted blobs. Treated as
    /// not-due; snoozing today keeps a reminder Pending instead.
    Snoozed,
}

/// A scheduled client-contact task, auto-generated from consumable or
/// service purchases.
///
/// Reminders are never deleted; they persist in the store indefinitely and
/// the "due" view is re-evaluated on every read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Reminder {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Client name captured at checkout.
    pub client_name: String,

    /// Client phone captured at checkout.
    pub client_phone: String,

    /// Name of the product that triggered the follow-up.
    pub product: String,

    /// Date of the originating sale.
    #[ts(as = "String")]
    pub sale_date: NaiveDate,

    /// Date the client should be contacted. Invariant at creation:
    /// `due_date >= sale_date`.
    #[ts(as = "String")]
    pub due_date: NaiveDate,

    /// Lifecycle status.
    pub status: ReminderStatus,
}

impl Reminder {
    /// A reminder is due when it is pending and its due date has arrived
    /// or passed.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.status == ReminderStatus::Pending && self.due_date <= today
    }

    /// Marks the reminder completed. Completed reminders never reappear in
    /// the due view, even with a past due date.
    pub fn complete(&mut self) {
        self.status = ReminderStatus::Completed;
    }

    /// Pushes the due date to `today + days`.
    ///
    /// Snoozing is relative to the moment of the snooze action, not to the
    /// previous due date: a reminder due yesterday snoozed by 7 is due 7
    /// days from today, not 6. The status stays Pending so the reminder
    /// resurfaces when the new date arrives.
    pub fn snooze(&mut self, today: NaiveDate, days: i64) {
        self.due_date = today + Duration::days(days);
    }
}

// =============================================================================
// Dashboard Read Models
// =============================================================================

/// A headline dashboard statistic (pre-formatted by the provider).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<bool>,
}

/// A recent sale as shown in the dashboard transaction list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Transaction {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Wall-clock time of day, e.g. "19:15".
    pub time: String,
    pub customer: String,
    pub items: i64,
    pub total_poisha: i64,
    pub profit_poisha: i64,
    pub payment_method: PaymentMethod,
}

impl Transaction {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_poisha(self.total_poisha)
    }

    #[inline]
    pub fn profit(&self) -> Money {
        Money::from_poisha(self.profit_poisha)
    }
}

/// A best-selling item row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TopItem {
    pub name: String,
    pub sold: i64,
    pub revenue_poisha: i64,
}

/// One partner's share of today's profit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PartnerSplit {
    pub name: String,
    /// Share of profit in whole percent.
    pub percentage: u32,
    pub amount_poisha: i64,
}

/// Raw figures backing today's metric cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TodayFigures {
    pub sales_poisha: i64,
    pub profit_poisha: i64,
    pub expenses_poisha: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(due: NaiveDate) -> Reminder {
        Reminder {
            id: "r1".to_string(),
            client_name: "Rahim Ahmed".to_string(),
            client_phone: "01700000000".to_string(),
            product: "Engine Oil (Shell Advance)".to_string(),
            sale_date: date(2026, 1, 1),
            due_date: due,
            status: ReminderStatus::Pending,
        }
    }

    #[test]
    fn test_manual_product() {
        let item = Product::manual("Gear Lever", Money::from_taka(320), Money::from_taka(200));
        assert!(item.id.starts_with("manual-"));
        assert_eq!(item.category, MANUAL_ITEM_CATEGORY);
        assert_eq!(item.stock, MANUAL_ITEM_STOCK);
        assert_eq!(item.margin(), Money::from_taka(120));
    }

    #[test]
    fn test_payment_method_serde_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Bkash).unwrap(),
            "\"bKash\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"Cash\"").unwrap(),
            PaymentMethod::Cash
        );
    }

    #[test]
    fn test_client_contact_requires_both_fields() {
        let mut details = CheckoutDetails {
            client_name: "Karim".to_string(),
            ..Default::default()
        };
        assert!(!details.has_client_contact());

        details.client_phone = "  ".to_string();
        assert!(!details.has_client_contact());

        details.client_phone = "01811111111".to_string();
        assert!(details.has_client_contact());
    }

    #[test]
    fn test_reminder_due_predicate() {
        let today = date(2026, 3, 15);

        assert!(reminder(date(2026, 3, 15)).is_due(today));
        assert!(reminder(date(2026, 3, 1)).is_due(today));
        assert!(!reminder(date(2026, 3, 16)).is_due(today));

        let mut done = reminder(date(2026, 3, 1));
        done.complete();
        assert!(!done.is_due(today));
    }

    #[test]
    fn test_snooze_is_relative_to_today() {
        let today = date(2026, 3, 15);
        // Due yesterday; snoozed by 7 -> due 7 days from today, not 8.
        let mut r = reminder(date(2026, 3, 14));
        r.snooze(today, 7);
        assert_eq!(r.due_date, date(2026, 3, 22));
        assert_eq!(r.status, ReminderStatus::Pending);
        assert!(!r.is_due(today));
    }

    #[test]
    fn test_reminder_blob_format() {
        let r = reminder(date(2026, 3, 1));
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"clientName\":\"Rahim Ahmed\""));
        assert!(json.contains("\"dueDate\":\"2026-03-01\""));
        assert!(json.contains("\"status\":\"pending\""));
    }
}
