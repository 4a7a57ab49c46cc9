//! Error types for loading and validating advisory inputs
//!
//! The calculation core itself is total and never returns these; they come
//! from input validation, CSV loading and the market-data boundary.

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Unknown risk appetite: {0}")]
    UnknownRiskAppetite(String),

    #[error("Unknown assumption key: {0}")]
    UnknownAssumption(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Market data error: {0}")]
    MarketData(String),

    #[error("Market data request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::num::ParseFloatError> for AdvisorError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AdvisorError::Parse(err.to_string())
    }
}
