use std::fmt::Write;
use std::fs::{create_dir_all, write};
use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::info;

use crate::analytics::SalesAnalytics;
use crate::enrichment::EnrichmentSummary;
use crate::models::{EnrichedTransaction, Transaction};
use crate::report::errors::ReportError;
use crate::types::round_currency;

const WIDTH: usize = 60;
const TOP_CUSTOMERS: usize = 5;

/// Renders the report and writes it to `path`, creating parent directories as needed.
pub fn generate_sales_report(
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
    analytics: &SalesAnalytics,
    generated_at: NaiveDateTime,
    path: &Path
) -> Result<(), ReportError> {
    let report = render_sales_report(transactions, enriched, analytics, generated_at)?;

    let to_io_error = |source| ReportError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(to_io_error)?;
    }

    write(path, report).map_err(to_io_error)?;
    info!("Sales report saved to [{}]", path.display());

    Ok(())
}

/// Formats the plain-text sales report.
pub fn render_sales_report(
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
    analytics: &SalesAnalytics,
    generated_at: NaiveDateTime
) -> Result<String, ReportError> {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let thin_rule = "-".repeat(WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "{:^width$}", "SALES ANALYTICS REPORT", width = WIDTH)?;
    writeln!(out, "{:^width$}", format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")), width = WIDTH)?;
    writeln!(out, "{:^width$}", format!("Records Processed: {}", transactions.len()), width = WIDTH)?;
    writeln!(out, "{rule}")?;

    section(&mut out, "OVERALL SUMMARY", &thin_rule)?;
    let average_order = match transactions.len() {
        0 => Decimal::ZERO,
        count => round_currency(analytics.total_revenue / Decimal::from(count))
    };
    writeln!(out, "Total Revenue:        {}", analytics.total_revenue)?;
    writeln!(out, "Total Transactions:   {}", transactions.len())?;
    writeln!(out, "Average Order Value:  {average_order}")?;
    match (analytics.daily_trend.first(), analytics.daily_trend.last()) {
        (Some(first), Some(last)) => writeln!(out, "Date Range:           {} to {}", first.date, last.date)?,
        _ => writeln!(out, "Date Range:           n/a")?
    }

    section(&mut out, "REGION-WISE PERFORMANCE", &thin_rule)?;
    writeln!(out, "{:<12}{:>16}{:>12}{:>14}", "Region", "Sales", "% of Total", "Transactions")?;
    for region in &analytics.regions {
        writeln!(
            out,
            "{:<12}{:>16}{:>11}%{:>14}",
            region.region, region.total_sales, region.percentage, region.transaction_count
        )?;
    }

    section(&mut out, "TOP SELLING PRODUCTS", &thin_rule)?;
    writeln!(out, "{:<6}{:<24}{:>10}{:>16}", "Rank", "Product", "Quantity", "Revenue")?;
    for (rank, product) in analytics.top_products.iter().enumerate() {
        writeln!(out, "{:<6}{:<24}{:>10}{:>16}", rank + 1, product.product_name, product.total_quantity, product.total_revenue)?;
    }

    section(&mut out, "TOP CUSTOMERS", &thin_rule)?;
    writeln!(out, "{:<6}{:<12}{:>16}{:>10}{:>16}", "Rank", "Customer", "Total Spent", "Orders", "Avg Order")?;
    for (rank, customer) in analytics.customers.iter().take(TOP_CUSTOMERS).enumerate() {
        writeln!(
            out,
            "{:<6}{:<12}{:>16}{:>10}{:>16}",
            rank + 1, customer.customer_id, customer.total_spent, customer.purchase_count, customer.avg_order_value
        )?;
        writeln!(out, "{:<6}Products: {}", "", customer.products_bought.join(", "))?;
    }

    section(&mut out, "DAILY SALES TREND", &thin_rule)?;
    writeln!(out, "{:<14}{:>16}{:>14}{:>16}", "Date", "Revenue", "Transactions", "Customers")?;
    for day in &analytics.daily_trend {
        writeln!(out, "{:<14}{:>16}{:>14}{:>16}", day.date, day.revenue, day.transaction_count, day.unique_customers)?;
    }

    section(&mut out, "PRODUCT PERFORMANCE", &thin_rule)?;
    match &analytics.peak_day {
        Some(peak) => writeln!(out, "Best Selling Day: {} | Revenue: {} | Transactions: {}", peak.date, peak.revenue, peak.transaction_count)?,
        None => writeln!(out, "Best Selling Day: n/a")?
    }
    if analytics.low_performers.is_empty() {
        writeln!(out, "Low Performing Products: none")?;
    } else {
        writeln!(out, "Low Performing Products:")?;
        for product in &analytics.low_performers {
            writeln!(out, "  - {} | Quantity: {} | Revenue: {}", product.product_name, product.total_quantity, product.total_revenue)?;
        }
    }

    section(&mut out, "API ENRICHMENT SUMMARY", &thin_rule)?;
    let summary = EnrichmentSummary::from_records(enriched);
    writeln!(out, "Total Products Enriched: {}/{}", summary.matched, summary.total)?;
    writeln!(out, "Success Rate:            {}%", summary.match_rate_percent)?;
    if summary.unmatched_product_ids.is_empty() {
        writeln!(out, "Products Not Enriched:   none")?;
    } else {
        writeln!(out, "Products Not Enriched:   {}", summary.unmatched_product_ids.join(", "))?;
    }
    writeln!(out, "{rule}")?;

    Ok(out)
}

fn section(out: &mut String, title: &str, rule: &str) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")?;

    Ok(())
}
