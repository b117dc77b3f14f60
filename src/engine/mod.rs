mod config;
mod errors;
mod pipeline;

pub use config::PipelineConfig;
pub use errors::PipelineError;
pub use pipeline::{SalesPipeline, StageEvent};
