use std::path::PathBuf;

use chrono::Local;
use tokio::task::spawn_blocking;
use tracing::info;

use crate::analytics::SalesAnalytics;
use crate::catalog::{CatalogSource, ProductCatalog};
use crate::engine::config::PipelineConfig;
use crate::engine::errors::PipelineError;
use crate::enrichment::{enrich_to_file, EnrichmentSummary};
use crate::ingest::{parse_transactions, read_sales_data};
use crate::models::Transaction;
use crate::report::generate_sales_report;
use crate::validation::{validate_and_filter, FilterOptions, FilterSummary, RecordOutcome};

/// Lines read from the input file and the transactions parsed out of them.
#[derive(Debug, Clone)]
pub struct IngestedBatch {
    pub lines_read: usize,
    pub transactions: Vec<Transaction>
}

/// Progress notifications emitted by [`SalesPipeline::run_with`] as each stage finishes.
#[derive(Debug)]
pub enum StageEvent<'a> {
    Validated(&'a FilterSummary),
    Analyzed(&'a SalesAnalytics),
    CatalogFetched { products: usize },
    Enriched(&'a EnrichmentSummary),
    ReportSaved(&'a PathBuf)
}

/// Outcome of a complete run.
///
/// `outcomes` is aligned with the transactions handed to [`SalesPipeline::run_with`].
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub summary: FilterSummary,
    pub outcomes: Vec<RecordOutcome>,
    pub analytics: SalesAnalytics,
    pub catalog_size: usize,
    pub enrichment: EnrichmentSummary,
    pub enriched_path: PathBuf,
    pub report_path: PathBuf
}

/// Sequential batch pipeline: load, parse, validate and filter, analyse, enrich, report.
///
/// Stages never overlap. Each one finishes before the next starts, and the transaction set is
/// held fully in memory throughout.
pub struct SalesPipeline<C: CatalogSource> {
    config: PipelineConfig,
    catalog: C
}

impl<C: CatalogSource> SalesPipeline<C> {
    pub fn new(config: PipelineConfig, catalog: C) -> Self {
        Self {
            config,
            catalog
        }
    }

    /// Loads and parses the input file.
    ///
    /// An unreadable or empty file is reported as [`PipelineError::NoData`].
    pub async fn ingest(&self) -> Result<IngestedBatch, PipelineError> {
        let path = self.config.input_path.clone();
        let encodings = self.config.encodings.clone();

        let batch = spawn_blocking(move || {
            let lines = read_sales_data(&path, &encodings);
            let transactions = parse_transactions(&lines);

            IngestedBatch {
                lines_read: lines.len(),
                transactions
            }
        }).await?;

        if batch.lines_read == 0 {
            return Err(PipelineError::NoData { path: self.config.input_path.clone() });
        }

        info!("Read {} lines and parsed {} transactions", batch.lines_read, batch.transactions.len());

        Ok(batch)
    }

    /// Runs every stage after ingestion, calling `on_stage` as each stage completes.
    pub async fn run_with<F>(&self, transactions: Vec<Transaction>, filter: &FilterOptions, mut on_stage: F) -> Result<PipelineReport, PipelineError>
    where
        F: FnMut(StageEvent<'_>)
    {
        if transactions.is_empty() {
            return Err(PipelineError::NoData { path: self.config.input_path.clone() });
        }

        let validation = validate_and_filter(transactions, filter);
        info!("Valid: {} | Invalid: {}", validation.valid.len(), validation.invalid_count);
        on_stage(StageEvent::Validated(&validation.summary));

        let analytics = SalesAnalytics::compute(&validation.valid, &self.config.analytics);
        on_stage(StageEvent::Analyzed(&analytics));

        let products = self.catalog.fetch_all_products().await;
        let catalog = ProductCatalog::from_products(&products);
        on_stage(StageEvent::CatalogFetched { products: products.len() });

        let valid = validation.valid;
        let enriched_path = self.config.enriched_path.clone();
        let report_path = self.config.report_path.clone();
        let report_analytics = analytics.clone();

        let (enrichment, report_path) = spawn_blocking(move || -> Result<(EnrichmentSummary, PathBuf), PipelineError> {
            let enriched = enrich_to_file(&valid, &catalog, &enriched_path)?;
            let enrichment = EnrichmentSummary::from_records(&enriched);

            generate_sales_report(&valid, &enriched, &report_analytics, Local::now().naive_local(), &report_path)?;

            Ok((enrichment, report_path))
        }).await??;

        on_stage(StageEvent::Enriched(&enrichment));
        on_stage(StageEvent::ReportSaved(&report_path));

        Ok(PipelineReport {
            summary: validation.summary,
            outcomes: validation.outcomes,
            analytics,
            catalog_size: products.len(),
            enrichment,
            enriched_path: self.config.enriched_path.clone(),
            report_path
        })
    }
}
