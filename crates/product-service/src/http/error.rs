//! HTTP mapping of product errors.

use crate::product_actor::ProductError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Error returned by every handler, rendered as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),

    /// The request could not be decoded (malformed JSON, wrong field types).
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Product(ProductError::Validation(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Product(ProductError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Product(ProductError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_actor::ValidationError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(ProductError::Validation(ValidationError::EmptyName)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ProductError::NotFound("3".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ProductError::Store("closed".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadRequest("bad json".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
