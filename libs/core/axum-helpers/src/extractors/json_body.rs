//! JSON body extractor with `{message}` rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// A missing content type, malformed JSON or a body that does not match `T`
/// all become `400 {"message": ...}` instead of axum's plain-text rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, http::header, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/echo",
            post(|JsonBody(p): JsonBody<Payload>| async move { p.name }),
        )
    }

    fn request(content_type: Option<&str>, body: &str) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/echo");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_decodes_valid_body() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"name":"Lamp"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Lamp");
    }

    #[tokio::test]
    async fn test_rejections_are_bad_request_json() {
        let cases = [
            (Some("application/json"), "{not json"),
            (Some("application/json"), r#"{"other":1}"#),
            (None, r#"{"name":"Lamp"}"#),
        ];

        for (content_type, body) in cases {
            let response = app().oneshot(request(content_type, body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
        }
    }
}
