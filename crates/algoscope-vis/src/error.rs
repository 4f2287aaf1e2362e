//! Error type for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// An operation the API refused to run.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid input for the requested operation
    #[error(transparent)]
    Rejected(#[from] algoscope_engine::Error),

    /// Request is missing what it needs
    #[error("bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_engine::Error;

    #[test]
    fn engine_errors_are_unprocessable() {
        let err: ApiError = Error::NotSorted { index: 2 }.into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn bad_requests() {
        let err = ApiError::BadRequest("no input".into());
        assert_eq!(err.to_string(), "bad request: no input");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
