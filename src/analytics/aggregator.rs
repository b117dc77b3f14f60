use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::analytics::accumulators::{CustomerAccumulator, DailyAccumulator, OrderedGroups, SalesAccumulator};
use crate::analytics::stats::{CustomerSummary, DailySales, PeakDay, ProductSales, RegionSales};
use crate::models::Transaction;
use crate::types::{round_currency, Quantity};

//NOTE: Every pass is best effort. A record whose sale amount cannot be computed, or whose totals would overflow
//      the running group, is skipped and the pass carries on with the remaining records.

fn skip(tx: &Transaction, pass: &str) {
    debug!("Skipping transaction [{}] in {pass}: sale amount overflow", tx.transaction_id);
}

/// Sum of every sale amount, rounded once at the end.
pub fn calculate_total_revenue(transactions: &[Transaction]) -> Decimal {
    let mut total = Decimal::ZERO;

    for tx in transactions {
        match tx.sale_amount().and_then(|amount| total.checked_add(amount)) {
            Some(new_total) => total = new_total,
            None => skip(tx, "total revenue")
        }
    }

    round_currency(total)
}

/// Sales per region with each region's share of the grand total, largest first.
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSales> {
    let mut groups = OrderedGroups::<SalesAccumulator>::new();
    let mut grand_total = Decimal::ZERO;

    for tx in transactions {
        let Some((amount, new_grand_total)) = tx.sale_amount()
            .and_then(|amount| grand_total.checked_add(amount).map(|total| (amount, total))) else {
            skip(tx, "region sales");
            continue;
        };

        if groups.entry(&tx.region).add_sale(amount) {
            grand_total = new_grand_total;
        } else {
            skip(tx, "region sales");
        }
    }

    let mut regions: Vec<RegionSales> = groups.into_groups()
        .into_iter()
        .map(|(region, sales)| RegionSales {
            region,
            total_sales: round_currency(sales.revenue),
            transaction_count: sales.count,
            percentage: share_of(sales.revenue, grand_total)
        })
        .collect();

    regions.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    regions
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_currency)
        .unwrap_or_default()
}

fn product_totals(transactions: &[Transaction], pass: &str) -> Vec<(String, SalesAccumulator)> {
    let mut groups = OrderedGroups::<SalesAccumulator>::new();

    for tx in transactions {
        let Some(amount) = tx.sale_amount() else {
            skip(tx, pass);
            continue;
        };

        if !groups.entry(&tx.product_name).add_units(tx.quantity, amount) {
            skip(tx, pass);
        }
    }

    groups.into_groups()
}

fn product_sales(product_name: String, sales: SalesAccumulator) -> ProductSales {
    ProductSales {
        product_name,
        total_quantity: sales.quantity,
        total_revenue: round_currency(sales.revenue)
    }
}

/// The `limit` products with the highest total quantity sold.
pub fn top_selling_products(transactions: &[Transaction], limit: usize) -> Vec<ProductSales> {
    let mut products = product_totals(transactions, "top products");

    products.sort_by(|(_, a), (_, b)| b.quantity.cmp(&a.quantity));
    products.truncate(limit);

    products.into_iter()
        .map(|(product_name, sales)| product_sales(product_name, sales))
        .collect()
}

/// Spending per customer, biggest spender first.
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerSummary> {
    let mut groups = OrderedGroups::<CustomerAccumulator>::new();

    for tx in transactions {
        let Some(amount) = tx.sale_amount() else {
            skip(tx, "customer analysis");
            continue;
        };

        if !groups.entry(&tx.customer_id).add_purchase(amount, &tx.product_name) {
            skip(tx, "customer analysis");
        }
    }

    let mut customers: Vec<CustomerSummary> = groups.into_groups()
        .into_iter()
        .map(|(customer_id, purchases)| {
            let avg_order_value = match purchases.purchases {
                0 => Decimal::ZERO,
                count => purchases.spent.checked_div(Decimal::from(count)).unwrap_or_default()
            };

            CustomerSummary {
                customer_id,
                total_spent: round_currency(purchases.spent),
                purchase_count: purchases.purchases,
                avg_order_value: round_currency(avg_order_value),
                products_bought: purchases.products.into_iter().collect()
            }
        })
        .collect();

    customers.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    customers
}

/// Revenue, transactions and distinct customers per date, in ascending date order.
///
/// Dates are ordered as text, so the input must use a sortable format.
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut days = BTreeMap::<String, DailyAccumulator>::new();

    for tx in transactions {
        let Some(amount) = tx.sale_amount() else {
            skip(tx, "daily trend");
            continue;
        };

        if !days.entry(tx.date.clone()).or_default().add_sale(amount, &tx.customer_id) {
            skip(tx, "daily trend");
        }
    }

    days.into_iter()
        .map(|(date, day)| DailySales {
            date,
            revenue: round_currency(day.revenue),
            transaction_count: day.count,
            unique_customers: day.customers.len()
        })
        .collect()
}

/// The date with the highest revenue, or `None` when there is nothing to analyse.
///
/// When several dates share the highest revenue, the one that appears first in the input wins.
pub fn find_peak_sales_day(transactions: &[Transaction]) -> Option<PeakDay> {
    let mut groups = OrderedGroups::<SalesAccumulator>::new();

    for tx in transactions {
        let Some(amount) = tx.sale_amount() else {
            skip(tx, "peak day");
            continue;
        };

        if !groups.entry(&tx.date).add_sale(amount) {
            skip(tx, "peak day");
        }
    }

    let mut peak: Option<(String, SalesAccumulator)> = None;

    for (date, day) in groups.into_groups() {
        if peak.as_ref().is_none_or(|(_, best)| day.revenue > best.revenue) {
            peak = Some((date, day));
        }
    }

    peak.map(|(date, day)| PeakDay {
        date,
        revenue: round_currency(day.revenue),
        transaction_count: day.count
    })
}

/// Products whose total quantity is strictly below `threshold`, lowest quantity first.
pub fn low_performing_products(transactions: &[Transaction], threshold: Quantity) -> Vec<ProductSales> {
    let mut products: Vec<(String, SalesAccumulator)> = product_totals(transactions, "low performers")
        .into_iter()
        .filter(|(_, sales)| sales.quantity < threshold)
        .collect();

    products.sort_by(|(_, a), (_, b)| a.quantity.cmp(&b.quantity));

    products.into_iter()
        .map(|(product_name, sales)| product_sales(product_name, sales))
        .collect()
}
