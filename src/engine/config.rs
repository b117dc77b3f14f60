use std::path::PathBuf;

use crate::analytics::AnalyticsOptions;
use crate::ingest::TextEncoding;

/// Everything the pipeline needs to know about where data lives and how to analyse it.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub enriched_path: PathBuf,
    pub report_path: PathBuf,
    /// Encodings tried in order when decoding the input file.
    pub encodings: Vec<TextEncoding>,
    pub analytics: AnalyticsOptions
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/sales_data.txt"),
            enriched_path: PathBuf::from("data/enriched_sales_data.txt"),
            report_path: PathBuf::from("output/sales_report.txt"),
            encodings: TextEncoding::DEFAULT_CANDIDATES.to_vec(),
            analytics: AnalyticsOptions::default()
        }
    }
}

impl PipelineConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_enriched_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.enriched_path = path.into();
        self
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    pub fn with_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    pub fn with_analytics(mut self, analytics: AnalyticsOptions) -> Self {
        self.analytics = analytics;
        self
    }
}
