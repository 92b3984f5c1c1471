use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::repositories::RepositoryError;

/// The single conversion point from a failed request to an HTTP response.
///
/// Missing rows answer 404 with an empty body; everything else answers 500
/// with the failure message as plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        if error.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::Internal(error.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(message) => {
                log::error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
