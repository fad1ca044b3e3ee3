use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown label: {0:?}")]
    UnknownLabel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DrillResult<T> = Result<T, DrillError>;

/// Reject NaN and infinite readings with a named error.
pub fn ensure_finite(name: &str, value: f64) -> DrillResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DrillError::InvalidInput(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
