mod accumulators;
mod aggregator;
mod stats;

pub use stats::{AnalyticsOptions, SalesAnalytics};
