//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Every error renders as a JSON [`ErrorBody`]. Store failures echo their
//! cause in `details`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use pineapple_core::DocumentId;
use pineapple_core::envelope::{
    ErrorBody, INTERNAL_SERVER_ERROR, INVALID_ENDPOINT, PRODUCT_NOT_FOUND,
};

use crate::store::StoreError;

/// Application-level error type for the catalog API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No product has this ID.
    #[error("Product not found: {0}")]
    ProductNotFound(DocumentId),

    /// Write to a path with no handler.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ProductNotFound(_) | Self::InvalidEndpoint(_) => StatusCode::NOT_FOUND,
        }
    }

    /// JSON body sent to the client.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Store(err) => ErrorBody::with_details(INTERNAL_SERVER_ERROR, err.to_string()),
            Self::Internal(msg) => ErrorBody::with_details(INTERNAL_SERVER_ERROR, msg.clone()),
            Self::ProductNotFound(_) => ErrorBody::new(PRODUCT_NOT_FOUND),
            Self::InvalidEndpoint(_) => ErrorBody::new(INVALID_ENDPOINT),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "API Error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
