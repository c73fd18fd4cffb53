use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl AppError {
    /// Map a non-success HTTP status to the matching error variant
    pub fn from_http_status(status: StatusCode) -> Self {
        match status.as_u16() {
            404 => AppError::NotFound(format!("HTTP {}", status)),
            429 => AppError::RateLimitError(format!("HTTP {}", status)),
            401 | 403 => AppError::Unauthorized(format!("HTTP {}", status)),
            500..=599 => AppError::ExternalServiceError(format!("HTTP {}", status)),
            _ => AppError::ApiError(format!("HTTP {}", status)),
        }
    }

    /// Errors that only affect a single identifier. The check loop reports
    /// them and moves on; every other variant stops the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::ApiError(_)
                | AppError::NotFound(_)
                | AppError::InvalidInput(_)
                | AppError::Unauthorized(_)
                | AppError::RateLimitError(_)
                | AppError::MalformedResponse(_)
                | AppError::ExternalServiceError(_)
        )
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for AppError {
    fn from(err: diesel::ConnectionError) -> Self {
        AppError::DatabaseError(format!("Failed to open database: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::from_http_status(status)
        } else if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
