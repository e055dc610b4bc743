// ==========================================
// Jharkhand Trip Planner - API layer errors
// ==========================================
// Converts repository and engine errors into user-facing
// business errors; every message carries an explicit reason.
// ==========================================

use thiserror::Error;

use crate::engine::error::EngineError;
use crate::repository::error::RepositoryError;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Input and lookup errors
    // ==========================================
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// End date precedes start date; the caller must block
    /// progression until the dates are corrected
    #[error("invalid date range: end {end} precedes start {start}")]
    InvalidDateRange { start: String, end: String },

    // ==========================================
    // Business rule errors
    // ==========================================
    #[error("business rule violation: {0}")]
    BusinessRuleViolation(String),

    /// Planner command issued before a session was started
    #[error("no active planning session")]
    NoActiveSession,

    // ==========================================
    // Data access errors
    // ==========================================
    #[error("data access error: {0}")]
    DataAccessError(String),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversion from RepositoryError
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) does not exist", entity, id))
            }
            RepositoryError::FetchFailed(msg) => ApiError::DataAccessError(msg),
            RepositoryError::DataError(msg) => ApiError::DataAccessError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// Conversion from EngineError
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidRange { start, end } => ApiError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            },
            EngineError::DayNotFound(day) => ApiError::NotFound(format!("day {}", day)),
            EngineError::IndexOutOfRange { day, index } => ApiError::InvalidInput(format!(
                "no entry at index {} in {}",
                index, day
            )),
            EngineError::NoPendingMove => {
                ApiError::BusinessRuleViolation("no pending move to resolve".to_string())
            }
        }
    }
}

/// Result alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Attraction".to_string(),
            id: "ranchi_001".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Attraction"));
                assert!(msg.contains("ranchi_001"));
            }
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_engine_error_conversion() {
        let engine_err = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2026, 11, 4).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
        };
        let api_err: ApiError = engine_err.into();
        assert!(matches!(api_err, ApiError::InvalidDateRange { .. }));
    }
}
