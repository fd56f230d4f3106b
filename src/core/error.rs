use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for request payloads
    #[error("Validation error: {0}")]
    Validation(String),

    /// Restaurant identifier missing or blank
    #[error("Invalid restaurant id: {0:?}")]
    InvalidRestaurantId(String),

    /// No versioned or flat pricing configuration exists for the restaurant
    #[error("No pricing configuration found for restaurant {restaurant_id}")]
    ConfigNotFound { restaurant_id: String },

    /// A pinned config version does not exist (only raised under the `reject` policy)
    #[error("Pricing config version {version} not found for restaurant {restaurant_id}")]
    ConfigVersionNotFound { restaurant_id: String, version: i64 },

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Event bus publication errors
    #[error("Event bus error: {0}")]
    EventBus(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRestaurantId(_) => StatusCode::BAD_REQUEST,
            // The restaurant is not onboarded correctly; not the caller's fault.
            AppError::ConfigNotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigVersionNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EventBus(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config_not_found(restaurant_id: impl Into<String>) -> Self {
        AppError::ConfigNotFound {
            restaurant_id: restaurant_id.into(),
        }
    }
}
