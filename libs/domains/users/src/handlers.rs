//! HTTP handlers for Users API

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{ErrorResponse, JsonBody, JwtAuth};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, TokenRequest, TokenResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, generate_token),
    components(schemas(CreateUser, TokenRequest, TokenResponse, ErrorResponse)),
    tags(
        (name = "Users", description = "Registration and token issuance")
    )
)]
pub struct ApiDoc;

/// Router state: the user service plus the token issuer
pub struct UsersState<R: UserRepository> {
    pub service: Arc<UserService<R>>,
    pub jwt: JwtAuth,
}

impl<R: UserRepository> Clone for UsersState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the users router
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt: JwtAuth) -> Router {
    let state = UsersState {
        service: Arc::new(service),
        jwt,
    };

    Router::new()
        .route("/", post(create_user))
        .route("/generateToken", post(generate_token))
        .with_state(state)
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Storage failure, including a taken email", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(state): State<UsersState<R>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<StatusCode> {
    state.service.create_user(input).await?;
    Ok(StatusCode::CREATED)
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/generateToken",
    tag = "Users",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "Password mismatch", body = ErrorResponse),
        (status = 404, description = "Unknown email", body = ErrorResponse)
    )
)]
async fn generate_token<R: UserRepository>(
    State(state): State<UsersState<R>>,
    JsonBody(input): JsonBody<TokenRequest>,
) -> UserResult<Json<TokenResponse>> {
    let user = state
        .service
        .authenticate(&input.email, &input.password)
        .await?;

    let access_token = state
        .jwt
        .issue_access_token(&user.id.to_string(), &user.name)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            UserError::Token(e.to_string())
        })?;

    Ok(Json(TokenResponse { access_token }))
}
