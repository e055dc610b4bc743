// ==========================================
// Jharkhand Trip Planner - repository layer errors
// ==========================================
// Tooling: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Repository layer error type
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Fetch errors =====
    #[error("record not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("catalog fetch failed: {0}")]
    FetchFailed(String),

    // ===== Data quality errors =====
    #[error("dataset parse failed: {0}")]
    DataError(String),

    // ===== Generic errors =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::DataError(err.to_string())
    }
}

/// Result alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
