use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("No provider registered under name '{0}'")]
    ProviderNotFound(String),
    #[error("Provider '{0}' is registered more than once")]
    DuplicateProvider(String),
    #[error("Provider '{provider}' is unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },
    #[error("Provider '{provider}' did not answer within {after:?}")]
    ProviderTimeout { provider: String, after: Duration },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaymentError {
    /// True when the chosen provider could not complete processing.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            PaymentError::ProviderUnavailable { .. } | PaymentError::ProviderTimeout { .. }
        )
    }

    /// Machine-readable error kind reported to API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentError::InvalidRequest(_) => "invalid_request",
            PaymentError::ProviderNotFound(_) => "provider_not_found",
            PaymentError::DuplicateProvider(_) => "duplicate_provider",
            PaymentError::ProviderUnavailable { .. } => "provider_unavailable",
            PaymentError::ProviderTimeout { .. } => "provider_timeout",
            PaymentError::CsvError(_) | PaymentError::IoError(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PaymentError::ProviderUnavailable { .. } => StatusCode::BAD_GATEWAY,
            PaymentError::ProviderTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            PaymentError::ProviderNotFound(_)
            | PaymentError::DuplicateProvider(_)
            | PaymentError::CsvError(_)
            | PaymentError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for a failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
