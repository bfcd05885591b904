//! Error types.
//!
//! Layout itself never fails; the only fallible surface is building a
//! metrics table from configuration.

use thiserror::Error;

use crate::metrics::Metric;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("metric {metric} must not be negative (got {value})")]
    Negative { metric: Metric, value: i32 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
