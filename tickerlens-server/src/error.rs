use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tickerlens::LensError;

/// Failures surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `ticker` parameter was absent, empty or whitespace-only.
    #[error("Ticker symbol is required")]
    MissingTicker,
    /// Any step of the report failed.
    #[error(transparent)]
    Fetch(#[from] LensError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingTicker => StatusCode::BAD_REQUEST,
            Self::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
