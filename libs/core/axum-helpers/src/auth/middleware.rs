use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware
///
/// Verifies the bearer token and inserts its [`JwtClaims`](super::JwtClaims)
/// into request extensions. A missing, malformed or expired token is a 401.
///
/// # Example
///
/// ```ignore
/// let protected_routes = Router::new()
///     .route("/products", get(list_products))
///     .route_layer(axum::middleware::from_fn_with_state(
///         auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_bearer_token(request.headers()) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AppError::Unauthorized("missing bearer token".to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized("invalid or expired token".to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtClaims, JwtConfig};
    use axum::{
        Extension, Router, body::Body, http::Request as HttpRequest, http::StatusCode,
        middleware::from_fn_with_state, routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("middleware-test-secret-32-characters!!").unwrap())
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route(
                "/me",
                get(|Extension(claims): Extension<JwtClaims>| async move { claims.name }),
            )
            .route_layer(from_fn_with_state(auth, jwt_auth_middleware))
    }

    fn request(authorization: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_passes_claims_through() {
        let auth = auth();
        let token = auth.issue_access_token("user-1", "Alice").unwrap();

        let response = app(auth)
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Alice");
    }

    #[tokio::test]
    async fn test_missing_or_bad_token_is_unauthorized() {
        let auth = auth();
        let expired = auth.issue_token("user-1", "Alice", -60).unwrap();
        let expired_header = format!("Bearer {}", expired);

        for header_value in [
            None,
            Some("Bearer "),
            Some("Basic dXNlcjpwYXNz"),
            Some("Bearer not.a.jwt"),
            Some(expired_header.as_str()),
        ] {
            let response = app(auth.clone()).oneshot(request(header_value)).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "{header_value:?}"
            );

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert!(json["message"].is_string());
        }
    }
}
