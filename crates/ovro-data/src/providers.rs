//! # Data Providers
//!
//! Injected data-access seams for the catalog, sale processing, and
//! dashboard feed.
//!
//! ## Why Traits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Provider Seams                                    │
//! │                                                                         │
//! │  Cart / Checkout / Dashboard code ──► trait ──┬──► Mock* (today)       │
//! │                                               │    in-memory data,     │
//! │                                               │    simulated latency   │
//! │                                               │                        │
//! │                                               └──► real backend        │
//! │                                                    (later, without     │
//! │                                                     touching callers)  │
//! │                                                                         │
//! │  The shop runs offline today; the mocks ARE the production providers.  │
//! │  Latency is simulated so the UI's loading states stay honest.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ovro_core::cart::{CartLine, CartTotals};
use ovro_core::metrics;
use ovro_core::types::{
    CheckoutDetails, PartnerSplit, PaymentMethod, Product, Stat, TodayFigures, TopItem,
    Transaction,
};

use crate::error::DataResult;

// =============================================================================
// Sale Submission
// =============================================================================

/// Everything a sale processor needs to record one completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSubmission {
    /// Sold lines, as priced at the counter.
    pub lines: Vec<CartLine>,

    /// Client and payment details entered at checkout.
    pub details: CheckoutDetails,

    /// Totals breakdown at submission time.
    pub totals: CartTotals,

    /// Calendar date of the sale.
    pub sale_date: NaiveDate,
}

/// Confirmation message returned by a successful sale submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleConfirmation {
    pub message: String,
}

// =============================================================================
// Provider Traits
// =============================================================================

/// Source of the product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full catalog.
    async fn fetch_products(&self) -> DataResult<Vec<Product>>;
}

/// Collaborator that records completed sales.
#[async_trait]
pub trait SaleProcessor: Send + Sync {
    /// Submits one sale. A rejection surfaces as `DataError::SaleRejected`
    /// and the caller keeps its cart for a manual retry.
    async fn submit(&self, submission: &SaleSubmission) -> DataResult<SaleConfirmation>;
}

/// Read-only feed behind the owner dashboard.
#[async_trait]
pub trait DashboardFeed: Send + Sync {
    /// Headline statistic cards.
    async fn fetch_stats(&self) -> DataResult<Vec<Stat>>;

    /// Recent transactions, newest first.
    async fn fetch_recent_transactions(&self) -> DataResult<Vec<Transaction>>;

    /// Best sellers.
    async fn fetch_top_items(&self) -> DataResult<Vec<TopItem>>;

    /// Partner profit splits for today.
    async fn fetch_partner_splits(&self) -> DataResult<Vec<PartnerSplit>>;

    /// Raw figures backing today's metric cards.
    async fn fetch_today_figures(&self) -> DataResult<TodayFigures>;
}

// =============================================================================
// Mock Catalog
// =============================================================================

/// In-memory catalog with the workshop's standard stock list.
#[derive(Debug, Default)]
pub struct MockCatalog;

/// Latency applied to catalog and dashboard fetches.
const FETCH_DELAY: Duration = Duration::from_millis(300);

/// Latency applied to sale submissions.
const SUBMIT_DELAY: Duration = Duration::from_millis(500);

fn product(id: &str, name: &str, category: &str, price_taka: i64, buy_taka: i64, stock: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price_poisha: price_taka * 100,
        buy_price_poisha: buy_taka * 100,
        stock,
    }
}

/// The standard stock list seeded on startup.
pub fn seed_products() -> Vec<Product> {
    vec![
        product("1", "Engine Oil (Shell Advance)", "Lubricants", 550, 420, 50),
        product("2", "Brake Pad (Yamaha FZ)", "Brakes", 350, 200, 20),
        product("3", "Chain Set (Generic)", "Drivetrain", 1200, 900, 15),
        product("4", "Air Filter", "Filters", 250, 150, 30),
        product("5", "Spark Plug (NGK)", "Ignition", 150, 80, 100),
        product("6", "Headlight Bulb (LED)", "Electrical", 450, 300, 25),
        product("7", "Side Mirror", "Body", 200, 120, 40),
        product("8", "Clutch Cable", "Controls", 180, 100, 15),
        product("9", "Car Wash", "Service", 150, 20, 999),
        product("10", "Full Service", "Service", 800, 200, 999),
    ]
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_products(&self) -> DataResult<Vec<Product>> {
        tokio::time::sleep(FETCH_DELAY).await;
        let products = seed_products();
        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}

// =============================================================================
// Mock Sale Processor
// =============================================================================

/// Sale processor that accepts every sale after a short delay.
#[derive(Debug, Default)]
pub struct MockSaleProcessor;

#[async_trait]
impl SaleProcessor for MockSaleProcessor {
    async fn submit(&self, submission: &SaleSubmission) -> DataResult<SaleConfirmation> {
        tokio::time::sleep(SUBMIT_DELAY).await;
        info!(
            lines = submission.lines.len(),
            total = %submission.totals.total(),
            method = ?submission.details.payment_method,
            "Processing sale"
        );
        Ok(SaleConfirmation {
            message: "Sale processed successfully!".to_string(),
        })
    }
}

// =============================================================================
// Mock Dashboard Feed
// =============================================================================

/// Dashboard feed serving representative figures for the demo shop.
#[derive(Debug, Default)]
pub struct MockDashboardFeed;

fn txn(
    id: &str,
    date: NaiveDate,
    time: &str,
    customer: &str,
    items: i64,
    total_taka: i64,
    profit_taka: i64,
    method: PaymentMethod,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date,
        time: time.to_string(),
        customer: customer.to_string(),
        items,
        total_poisha: total_taka * 100,
        profit_poisha: profit_taka * 100,
        payment_method: method,
    }
}

#[async_trait]
impl DashboardFeed for MockDashboardFeed {
    async fn fetch_stats(&self) -> DataResult<Vec<Stat>> {
        tokio::time::sleep(FETCH_DELAY).await;
        Ok(vec![
            Stat {
                label: "Today's Sales".to_string(),
                value: "৳12,450".to_string(),
                trend: Some("+15% vs yesterday".to_string()),
                positive: Some(true),
            },
            Stat {
                label: "Net Profit".to_string(),
                value: "৳4,200".to_string(),
                trend: Some("+8% vs yesterday".to_string()),
                positive: Some(true),
            },
            Stat {
                label: "Expenses".to_string(),
                value: "৳1,500".to_string(),
                trend: Some("-2% vs yesterday".to_string()),
                positive: Some(true),
            },
            Stat {
                label: "Low Stock Items".to_string(),
                value: "3".to_string(),
                trend: Some("Needs restock".to_string()),
                positive: Some(false),
            },
        ])
    }

    async fn fetch_recent_transactions(&self) -> DataResult<Vec<Transaction>> {
        tokio::time::sleep(FETCH_DELAY).await;
        let d1 = NaiveDate::from_ymd_opt(2025, 12, 11).unwrap_or_default();
        let d2 = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap_or_default();
        Ok(vec![
            txn("TXN001", d1, "19:15", "Rahim Ahmed", 3, 1250, 380, PaymentMethod::Cash),
            txn("TXN002", d1, "18:42", "Karim Hossain", 2, 800, 200, PaymentMethod::Bkash),
            txn("TXN003", d1, "17:30", "Fahim Islam", 5, 2150, 650, PaymentMethod::Cash),
            txn("TXN004", d1, "16:20", "Tanvir Rahman", 1, 550, 130, PaymentMethod::Card),
            txn("TXN005", d1, "15:05", "Shakib Hasan", 4, 1800, 520, PaymentMethod::Bkash),
            txn("TXN006", d2, "19:50", "Mehedi Alam", 2, 700, 180, PaymentMethod::Cash),
            txn("TXN007", d2, "18:15", "Nasir Uddin", 3, 1100, 320, PaymentMethod::Cash),
        ])
    }

    async fn fetch_top_items(&self) -> DataResult<Vec<TopItem>> {
        tokio::time::sleep(FETCH_DELAY).await;
        Ok(vec![
            TopItem { name: "Engine Oil (Shell Advance)".to_string(), sold: 45, revenue_poisha: 2_475_000 },
            TopItem { name: "Full Service".to_string(), sold: 32, revenue_poisha: 2_560_000 },
            TopItem { name: "Brake Pad (Yamaha FZ)".to_string(), sold: 28, revenue_poisha: 980_000 },
            TopItem { name: "Car Wash".to_string(), sold: 25, revenue_poisha: 375_000 },
            TopItem { name: "Air Filter".to_string(), sold: 20, revenue_poisha: 500_000 },
        ])
    }

    async fn fetch_partner_splits(&self) -> DataResult<Vec<PartnerSplit>> {
        tokio::time::sleep(FETCH_DELAY).await;
        let today_profit = self.fetch_today_figures().await?.profit_poisha;
        Ok(vec![
            PartnerSplit {
                name: "Partner A (Dhaka)".to_string(),
                percentage: 50,
                amount_poisha: metrics::split_amount(today_profit, 50),
            },
            PartnerSplit {
                name: "Partner B (Shop)".to_string(),
                percentage: 50,
                amount_poisha: metrics::split_amount(today_profit, 50),
            },
        ])
    }

    async fn fetch_today_figures(&self) -> DataResult<TodayFigures> {
        Ok(TodayFigures {
            sales_poisha: 1_245_000,
            profit_poisha: 420_000,
            expenses_poisha: 150_000,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog_serves_standard_stock() {
        let products = MockCatalog.fetch_products().await.unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].name, "Engine Oil (Shell Advance)");
        assert_eq!(products[0].price_poisha, 55_000);
        assert_eq!(products[9].stock, 999);
    }

    #[tokio::test]
    async fn test_mock_processor_accepts_sales() {
        let submission = SaleSubmission {
            lines: Vec::new(),
            details: CheckoutDetails::default(),
            totals: ovro_core::cart::Cart::new()
                .totals(ovro_core::DiscountRate::zero(), ovro_core::Money::zero()),
            sale_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        let confirmation = MockSaleProcessor.submit(&submission).await.unwrap();
        assert_eq!(confirmation.message, "Sale processed successfully!");
    }

    #[tokio::test]
    async fn test_partner_splits_cover_today_profit() {
        let feed = MockDashboardFeed;
        let figures = feed.fetch_today_figures().await.unwrap();
        let splits = feed.fetch_partner_splits().await.unwrap();

        let distributed: i64 = splits.iter().map(|s| s.amount_poisha).sum();
        assert_eq!(distributed, figures.profit_poisha);
        assert!(splits.iter().all(|s| s.percentage == 50));
    }

    #[test]
    fn test_sale_submission_serializes_date_as_plain_day() {
        let submission = SaleSubmission {
            lines: Vec::new(),
            details: CheckoutDetails::default(),
            totals: ovro_core::cart::Cart::new()
                .totals(ovro_core::DiscountRate::zero(), ovro_core::Money::zero()),
            sale_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"saleDate\":\"2026-01-15\""));
    }
}
