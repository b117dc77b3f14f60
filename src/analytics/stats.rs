use rust_decimal::Decimal;

use crate::analytics::aggregator::{
    calculate_total_revenue, customer_analysis, daily_sales_trend, find_peak_sales_day, low_performing_products,
    region_wise_sales, top_selling_products
};
use crate::models::Transaction;
use crate::types::Quantity;

/// Sales for one region. `percentage` is this region's share of the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSales {
    pub region: String,
    pub total_sales: Decimal,
    pub transaction_count: usize,
    pub percentage: Decimal
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_name: String,
    pub total_quantity: Quantity,
    pub total_revenue: Decimal
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spent: Decimal,
    pub purchase_count: usize,
    pub avg_order_value: Decimal,
    /// Distinct product names bought, sorted.
    pub products_bought: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySales {
    pub date: String,
    pub revenue: Decimal,
    pub transaction_count: usize,
    pub unique_customers: usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakDay {
    pub date: String,
    pub revenue: Decimal,
    pub transaction_count: usize
}

/// Parameters for the parameterised passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsOptions {
    /// How many products `top_selling_products` keeps.
    pub top_products: usize,
    /// Products with a total quantity strictly below this are low performers.
    pub low_stock_threshold: Quantity
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            top_products: 5,
            low_stock_threshold: 10
        }
    }
}

/// Every analytic summary for one batch of valid transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesAnalytics {
    pub total_revenue: Decimal,
    pub regions: Vec<RegionSales>,
    pub top_products: Vec<ProductSales>,
    pub customers: Vec<CustomerSummary>,
    pub daily_trend: Vec<DailySales>,
    pub peak_day: Option<PeakDay>,
    pub low_performers: Vec<ProductSales>
}

impl SalesAnalytics {
    /// Runs all seven passes. Each pass is independent and only reads `transactions`.
    pub fn compute(transactions: &[Transaction], options: &AnalyticsOptions) -> Self {
        Self {
            total_revenue: calculate_total_revenue(transactions),
            regions: region_wise_sales(transactions),
            top_products: top_selling_products(transactions, options.top_products),
            customers: customer_analysis(transactions),
            daily_trend: daily_sales_trend(transactions),
            peak_day: find_peak_sales_day(transactions),
            low_performers: low_performing_products(transactions, options.low_stock_threshold)
        }
    }
}
