mod analytics;
mod catalog;
mod cli;
mod engine;
mod enrichment;
mod ingest;
mod models;
mod report;
mod types;
mod validation;

use std::io::{stderr, stdin, stdout};

use anyhow::Result;
use clap::Parser;
use tokio::task::spawn_blocking;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::catalog::HttpCatalogClient;
use crate::cli::{parse_log_level, prompt_filter_options, Cli};
use crate::engine::{PipelineError, SalesPipeline, StageEvent};
use crate::validation::{FilterCatalog, RecordOutcome};

const BANNER_WIDTH: usize = 40;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let banner = "=".repeat(BANNER_WIDTH);
    println!("{banner}");
    println!("SALES ANALYTICS SYSTEM");
    println!("{banner}");

    //NOTE: Failures are reported, not propagated, so the process always completes normally
    if let Err(error) = execute(cli).await {
        error!("{error}");
        println!("\nERROR OCCURRED");
        println!("Reason: {error}");
        println!("Please check input files or configurations.");
        println!("{banner}");
    }

    Ok(())
}

async fn execute(cli: Cli) -> Result<(), PipelineError> {
    let catalog = HttpCatalogClient::new(cli.catalog_url.clone(), cli.catalog_timeout())?;
    let pipeline = SalesPipeline::new(cli.pipeline_config(), catalog);

    println!("\n[1/10] Reading sales data...");
    let batch = pipeline.ingest().await?;
    println!("✓ Successfully read {} transactions", batch.lines_read);

    println!("\n[2/10] Parsing and cleaning data...");
    println!("✓ Parsed {} records", batch.transactions.len());

    println!("\n[3/10] Filter Options Available:");
    let available = FilterCatalog::from_transactions(&batch.transactions);
    let filter = if cli.should_prompt() {
        spawn_blocking(move || prompt_filter_options(&mut stdin().lock(), &mut stdout(), &available))
            .await?
            .unwrap_or_else(|error| {
                error!("Unable to read filter options: {error}");
                Default::default()
            })
    } else {
        println!("Regions: {}", available.regions.join(", "));
        if let (Some(min), Some(max)) = (available.min_amount, available.max_amount) {
            println!("Amount Range: ₹{} - ₹{}", min.round_dp(0), max.round_dp(0));
        }
        cli.filter_options()
    };

    println!("\n[4/10] Validating transactions...");
    let report = pipeline.run_with(batch.transactions, &filter, print_stage).await?;

    info!("Run finished with {} transactions after filtering", report.summary.final_count);

    println!("\n[10/10] Process Complete!");
    println!("Transactions analysed: {} | Total revenue: {}", report.summary.final_count, report.analytics.total_revenue);
    println!("Catalog products: {} | Enriched: {}/{}", report.catalog_size, report.enrichment.matched, report.enrichment.total);
    println!("Enriched data: {}", report.enriched_path.display());
    println!("Report: {}", report.report_path.display());

    let rejected: Vec<String> = report.outcomes.iter()
        .filter_map(|outcome| match outcome {
            RecordOutcome::Rejected(error) => Some(error.to_string()),
            _ => None
        })
        .collect();
    if !rejected.is_empty() {
        println!("Rejected records:");
        for reason in rejected {
            println!("  - {reason}");
        }
    }
    println!("{}", "=".repeat(BANNER_WIDTH));

    Ok(())
}

fn print_stage(event: StageEvent<'_>) {
    match event {
        StageEvent::Validated(summary) => {
            println!("✓ Valid: {} | Invalid: {} (of {})", summary.final_count, summary.invalid, summary.total_input);
            if summary.filtered_by_region > 0 || summary.filtered_by_amount > 0 {
                println!("✓ Filtered out by region: {} | by amount: {}", summary.filtered_by_region, summary.filtered_by_amount);
            }
            println!("\n[5/10] Analyzing sales data...");
        }
        StageEvent::Analyzed(analytics) => {
            println!("✓ Analysis complete (total revenue: {})", analytics.total_revenue);
            println!("\n[6/10] Fetching product data from API...");
        }
        StageEvent::CatalogFetched { products } => {
            println!("✓ Fetched {products} products");
            println!("\n[7/10] Enriching sales data...");
        }
        StageEvent::Enriched(summary) => {
            println!("✓ Enriched {}/{} transactions ({}%)", summary.matched, summary.total, summary.match_rate_percent);
            println!("\n[8/10] Saving enriched data...");
            println!("✓ Enriched data saved");
            println!("\n[9/10] Generating report...");
        }
        StageEvent::ReportSaved(path) => {
            println!("✓ Report saved to: {}", path.display());
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Progress output goes to stdout, so logging is kept on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
