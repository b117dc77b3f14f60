use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

use crate::analytics::AnalyticsOptions;
use crate::catalog::{DEFAULT_CATALOG_TIMEOUT, DEFAULT_CATALOG_URL};
use crate::engine::PipelineConfig;
use crate::ingest::TextEncoding;
use crate::types::Quantity;
use crate::validation::FilterOptions;

/// Sales analytics over a pipe-delimited transaction file.
#[derive(Debug, Parser)]
#[command(name = "sales-analytics", version)]
pub struct Cli {
    /// Pipe-delimited sales file; the first line is treated as a header.
    #[arg(default_value = "data/sales_data.txt")]
    pub input: PathBuf,

    /// Where the enriched transactions are written.
    #[arg(long, default_value = "data/enriched_sales_data.txt")]
    pub enriched_output: PathBuf,

    /// Where the text report is written.
    #[arg(long, default_value = "output/sales_report.txt")]
    pub report_output: PathBuf,

    /// Product catalog endpoint returning `{"products": [...]}`.
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Connect and read timeout for the catalog request.
    #[arg(long, default_value_t = DEFAULT_CATALOG_TIMEOUT.as_secs())]
    pub catalog_timeout_secs: u64,

    /// Candidate input encoding, tried in the order given (utf-8, latin-1, cp1252).
    #[arg(long = "encoding")]
    pub encodings: Vec<TextEncoding>,

    /// Keep only transactions from this region.
    #[arg(long)]
    pub region: Option<String>,

    /// Keep only transactions whose sale amount is at least this value.
    #[arg(long)]
    pub min_amount: Option<Decimal>,

    /// Keep only transactions whose sale amount is at most this value.
    #[arg(long)]
    pub max_amount: Option<Decimal>,

    /// Skip the interactive filter prompt.
    #[arg(long)]
    pub no_prompt: bool,

    /// Number of products listed as top sellers.
    #[arg(long, default_value_t = 5)]
    pub top_products: usize,

    /// Products selling fewer units than this are reported as low performers.
    #[arg(long, default_value_t = 10)]
    pub low_stock_threshold: Quantity,

    /// error, warn, info, debug or trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        let encodings = if self.encodings.is_empty() {
            TextEncoding::DEFAULT_CANDIDATES.to_vec()
        } else {
            self.encodings.clone()
        };

        PipelineConfig::default()
            .with_input_path(&self.input)
            .with_enriched_path(&self.enriched_output)
            .with_report_path(&self.report_output)
            .with_encodings(encodings)
            .with_analytics(AnalyticsOptions {
                top_products: self.top_products,
                low_stock_threshold: self.low_stock_threshold
            })
    }

    /// Filters given on the command line; these are used as-is when prompting is disabled.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            region: self.region.clone().filter(|region| !region.trim().is_empty()),
            min_amount: self.min_amount,
            max_amount: self.max_amount
        }
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_secs)
    }

    /// Prompting only happens when it was not disabled and no filter was supplied up front.
    pub fn should_prompt(&self) -> bool {
        !self.no_prompt && self.filter_options() == FilterOptions::default()
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}
