//! Error types for incentive evaluation and state scenario loading

/// Errors raised while evaluating tax incentives
#[derive(Debug, thiserror::Error)]
pub enum IncentiveError {
    /// Identifier outside the known exemption/deduction/credit/refund ranges
    #[error("invalid incentive number '{0}'")]
    UnknownIncentive(i64),

    /// A formula was selected without one of its declared inputs
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),

    /// State tax table is malformed (blank or duplicate state)
    #[error("invalid state table: {0}")]
    InvalidStateTable(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for Result with `IncentiveError`
pub type Result<T> = std::result::Result<T, IncentiveError>;
