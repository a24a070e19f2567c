//! # Dashboard Metrics
//!
//! Derived ratios shown on the owner dashboard. Inputs are whole-taka
//! figures as reported by the dashboard feed; outputs are formatted to
//! one decimal place the way the dashboard renders them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Profit margin and expense ratio for a trading day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DayMetrics {
    /// Profit as a percentage of sales, one decimal place.
    pub profit_margin: String,

    /// Expenses as a percentage of sales, one decimal place.
    pub expense_ratio: String,
}

/// Computes day metrics from sales, profit and expense figures.
///
/// A zero-sales day yields "0.0" for both ratios rather than a division
/// error.
pub fn calculate_metrics(sales_taka: i64, profit_taka: i64, expenses_taka: i64) -> DayMetrics {
    if sales_taka == 0 {
        return DayMetrics {
            profit_margin: "0.0".to_string(),
            expense_ratio: "0.0".to_string(),
        };
    }
    let sales = sales_taka as f64;
    DayMetrics {
        profit_margin: format!("{:.1}", profit_taka as f64 / sales * 100.0),
        expense_ratio: format!("{:.1}", expenses_taka as f64 / sales * 100.0),
    }
}

/// Computes a partner's share of a profit figure, in poisha.
///
/// Integer division truncates; with the standard 50/50 split nothing
/// is lost because profit figures are whole poisha.
pub fn split_amount(profit_poisha: i64, percentage: u32) -> i64 {
    profit_poisha * percentage as i64 / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_day() {
        let m = calculate_metrics(12_450, 4_200, 1_500);
        assert_eq!(m.profit_margin, "33.7");
        assert_eq!(m.expense_ratio, "12.0");
    }

    #[test]
    fn test_zero_sales_day() {
        let m = calculate_metrics(0, 0, 500);
        assert_eq!(m.profit_margin, "0.0");
        assert_eq!(m.expense_ratio, "0.0");
    }

    #[test]
    fn test_one_decimal_formatting() {
        let m = calculate_metrics(3, 1, 2);
        assert_eq!(m.profit_margin, "33.3");
        assert_eq!(m.expense_ratio, "66.7");
    }

    #[test]
    fn test_split_amount() {
        assert_eq!(split_amount(420_000, 50), 210_000);
        assert_eq!(split_amount(420_000, 30), 126_000);
        assert_eq!(split_amount(0, 50), 0);
    }
}
