use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use careerpath_core::error::error_response;

/// API error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No document store is configured for this process.
    #[error("database not available")]
    StoreUnavailable,
    #[error("career not found")]
    CareerNotFound,
    /// An id that the store cannot parse.
    #[error("invalid id")]
    InvalidId,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::CareerNotFound => "CAREER_NOT_FOUND",
            Self::InvalidId => "INVALID_ID",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::CareerNotFound => StatusCode::NOT_FOUND,
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Read paths degrade to a fallback value when the store is absent; every
/// other error still propagates.
pub trait OrDegraded<T> {
    fn or_degraded(self, fallback: impl FnOnce() -> T) -> Result<T, ApiError>;
}

impl<T> OrDegraded<T> for Result<T, ApiError> {
    fn or_degraded(self, fallback: impl FnOnce() -> T) -> Result<T, ApiError> {
        match self {
            Err(ApiError::StoreUnavailable) => Ok(fallback()),
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let cause = match &self {
            Self::Internal(e) => Some(e as &dyn std::fmt::Display),
            _ => None,
        };
        error_response(self.status(), self.kind(), self.to_string(), cause)
    }
}
