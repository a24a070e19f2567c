//! # Follow-up Scheduling Rules
//!
//! Maps sold consumables to follow-up reminders. Certain products wear
//! out on a known schedule, so selling one is a cue to contact the
//! client when a replacement is due.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │             Keyword ──► Interval Mapping                         │
//! │                                                                  │
//! │  "Engine Oil (Shell Advance)" ──contains──► "oil"    ──► 60 d   │
//! │  "Air Filter"                 ──contains──► "filter" ──► 90 d   │
//! │  "Brake Pad (Yamaha FZ)"      ──contains──► "brake"  ──► 180 d  │
//! │  "Chain Set (Generic)"        ──contains──► "chain"  ──► 120 d  │
//! │                                                                  │
//! │  Matching is case-insensitive substring. The rule table is       │
//! │  ordered: the FIRST matching rule wins, so "Oil Filter" maps     │
//! │  to the oil rule (60 days), never to both.                       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::types::{CheckoutDetails, Reminder, ReminderStatus};

// =============================================================================
// Rule Table
// =============================================================================

/// One follow-up rule: a product-name keyword, the number of days until
/// the client should be contacted again, and the reminder label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowupRule {
    pub keyword: &'static str,
    pub interval_days: i64,
    pub label: &'static str,
}

/// The rule table, in priority order. Order is policy: a product name
/// matching several keywords takes the first rule listed here.
pub const FOLLOWUP_RULES: &[FollowupRule] = &[
    FollowupRule {
        keyword: "oil",
        interval_days: 60,
        label: "Mobil Change Reminder",
    },
    FollowupRule {
        keyword: "filter",
        interval_days: 90,
        label: "Filter Check Reminder",
    },
    FollowupRule {
        keyword: "brake",
        interval_days: 180,
        label: "Brake Service Reminder",
    },
    FollowupRule {
        keyword: "chain",
        interval_days: 120,
        label: "Chain Service Reminder",
    },
];

/// Finds the first rule whose keyword appears in `product_name`,
/// case-insensitively. Returns `None` for products with no follow-up.
pub fn match_rule(product_name: &str) -> Option<&'static FollowupRule> {
    let lowered = product_name.to_lowercase();
    FOLLOWUP_RULES.iter().find(|r| lowered.contains(r.keyword))
}

// =============================================================================
// Reminder Synthesis
// =============================================================================

/// Scans sold cart lines and synthesizes pending reminders for every
/// line that matches a follow-up rule.
///
/// Returns an empty vec when the checkout details lack a client name or
/// phone (no way to contact the client, so nothing to schedule). Each
/// matching line yields exactly one reminder with
/// `due_date = sale_date + interval_days`, so `due_date >= sale_date`
/// always holds at creation.
pub fn scan_sold_lines(
    lines: &[CartLine],
    details: &CheckoutDetails,
    sale_date: NaiveDate,
) -> Vec<Reminder> {
    if !details.has_client_contact() {
        return Vec::new();
    }

    lines
        .iter()
        .filter_map(|line| {
            let rule = match_rule(&line.name)?;
            Some(Reminder {
                id: Uuid::new_v4().to_string(),
                client_name: details.client_name.trim().to_string(),
                client_phone: details.client_phone.trim().to_string(),
                product: line.name.clone(),
                sale_date,
                due_date: sale_date + Duration::days(rule.interval_days),
                status: ReminderStatus::Pending,
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::DiscountRate;
    use crate::types::{PaymentMethod, Product};
    use crate::Money;

    fn line(name: &str) -> CartLine {
        CartLine::from_product(&Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: "Parts".to_string(),
            price_poisha: 55_000,
            buy_price_poisha: 42_000,
            stock: 50,
        })
    }

    fn details(name: &str, phone: &str) -> CheckoutDetails {
        CheckoutDetails {
            client_name: name.to_string(),
            client_phone: phone.to_string(),
            client_odo: String::new(),
            service_charge_poisha: Money::zero().poisha(),
            payment_method: PaymentMethod::Cash,
            discount: DiscountRate::zero(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_match_rule_case_insensitive() {
        assert_eq!(match_rule("Engine Oil (Shell Advance)").unwrap().interval_days, 60);
        assert_eq!(match_rule("AIR FILTER").unwrap().interval_days, 90);
        assert_eq!(match_rule("Brake Pad (Yamaha FZ)").unwrap().interval_days, 180);
        assert_eq!(match_rule("Chain Set (Generic)").unwrap().interval_days, 120);
        assert!(match_rule("Side Mirror").is_none());
    }

    /// "Oil Filter" matches both "oil" and "filter"; the first rule in
    /// the table wins.
    #[test]
    fn test_first_match_wins() {
        let rule = match_rule("Oil Filter").unwrap();
        assert_eq!(rule.keyword, "oil");
        assert_eq!(rule.interval_days, 60);
    }

    #[test]
    fn test_oil_sale_creates_60_day_reminder() {
        let sale_date = date(2026, 1, 15);
        let reminders = scan_sold_lines(
            &[line("Engine Oil (Shell Advance)")],
            &details("Rahim", "01712345678"),
            sale_date,
        );

        assert_eq!(reminders.len(), 1);
        let r = &reminders[0];
        assert_eq!(r.client_name, "Rahim");
        assert_eq!(r.product, "Engine Oil (Shell Advance)");
        assert_eq!(r.sale_date, sale_date);
        assert_eq!(r.due_date, date(2026, 3, 16));
        assert_eq!(r.status, ReminderStatus::Pending);
        assert!(r.due_date >= r.sale_date);
    }

    #[test]
    fn test_missing_contact_creates_no_reminders() {
        let lines = vec![line("Engine Oil (Shell Advance)"), line("Brake Pad")];
        let sale_date = date(2026, 1, 15);

        assert!(scan_sold_lines(&lines, &details("", "01712345678"), sale_date).is_empty());
        assert!(scan_sold_lines(&lines, &details("Rahim", ""), sale_date).is_empty());
        assert!(scan_sold_lines(&lines, &details("   ", "01712345678"), sale_date).is_empty());
    }

    #[test]
    fn test_one_reminder_per_matching_line() {
        let lines = vec![
            line("Engine Oil (Shell Advance)"),
            line("Side Mirror"),
            line("Chain Set (Generic)"),
        ];
        let reminders = scan_sold_lines(&lines, &details("Karim", "01811111111"), date(2026, 2, 1));

        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].due_date, date(2026, 4, 2));
        assert_eq!(reminders[1].due_date, date(2026, 6, 1));
    }

    #[test]
    fn test_reminder_ids_are_unique() {
        let lines = vec![line("Engine Oil"), line("Engine Oil")];
        let reminders = scan_sold_lines(&lines, &details("Karim", "01811111111"), date(2026, 2, 1));
        assert_eq!(reminders.len(), 2);
        assert_ne!(reminders[0].id, reminders[1].id);
    }
}
