//! Maps document export failures to HTTP responses with a JSON error body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::ExportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request named a view or table that does not exist.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The requested state is not in the catalog.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rendering the document failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnknownView(_) | ExportError::InvalidObjectId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_view_is_a_client_error() {
        let err = ApiError::from(ExportError::UnknownView("chart".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "bad request: unknown view: chart");
    }

    #[test]
    fn buffer_failure_is_a_server_error() {
        let err = ApiError::from(ExportError::Buffer("closed".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
