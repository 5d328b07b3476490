use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// { "message": "name is required" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own errors into this type; the message they
/// carry is forwarded to the client verbatim.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{}", .0.body_text())]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("{0}")]
    InvalidId(#[from] identity::IdentityError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::InvalidId(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!("Query extraction error: {:?}", e);
            }
            AppError::InvalidId(e) => tracing::warn!("{}", e),
            AppError::BadRequest(msg) => tracing::info!("Bad request: {}", msg),
            AppError::Unauthorized(msg) => tracing::info!("Unauthorized: {}", msg),
            AppError::NotFound(msg) => tracing::info!("Not found: {}", msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
            }
        }

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("route not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_forwards_message() {
        let (status, body) = render(AppError::BadRequest("name is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "name is required");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::InternalServerError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status, expected);
            assert_eq!(body.message, "x");
        }
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let err: AppError = identity::parse_id("nope").unwrap_err().into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.starts_with("invalid id"));
        assert!(body.message.contains("nope"));
    }

    #[tokio::test]
    async fn test_fallback_is_not_found() {
        let (status, body) = render(not_found().await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "route not found");
    }
}
