use crate::helpers::Message;
use crate::store::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Errors surfaced by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or out-of-constraint input
    #[error("{0}")]
    Validation(String),
    /// Target record is absent
    #[error("{0}")]
    NotFound(String),
    /// The request exceeded the configured deadline
    #[error("Request timed out")]
    Timeout,
    /// Any other persistence failure, detail is only logged
    #[error("Internal server error")]
    Store,
}

impl ApiError {
    pub fn not_valid(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Validation("Validation error".to_string())
        } else {
            Self::Validation(message)
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(entity) => Self::NotFound(format!("{} not found", entity)),
            StoreError::Database(msg) => {
                tracing::error!("Store failure: {}", msg);
                Self::Store
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Message::new(self.to_string()))
    }
}
