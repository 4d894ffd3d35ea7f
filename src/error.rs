//! Error types for parameter validation and loading

use thiserror::Error;

/// Errors raised before a projection runs. The engine itself never fails.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Too many lump sums: {count} given, at most {max} allowed")]
    TooManyLumpSums { count: usize, max: usize },

    #[error("Lump sum month {month} is outside the horizon 1..={horizon}")]
    LumpSumOutsideHorizon { month: u32, horizon: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
