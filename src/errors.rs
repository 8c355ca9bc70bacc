use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the computation and ingestion boundaries.
///
/// The public recommendation flow never surfaces these to its caller; the
/// orchestrator logs them and degrades to an empty list instead.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("age must be non-negative, got {0} months")]
    NegativeAge(i64),

    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: String, value: f64 },

    #[error("failed to load food catalog from {path:?}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("Column '{0}' not found")]
    MissingColumn(String),

    #[error("unsupported catalog format: {0}")]
    UnsupportedCatalogFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecommendError {
    pub(crate) fn non_finite(field: impl Into<String>, value: f64) -> Self {
        RecommendError::NonFinite { field: field.into(), value }
    }
}
