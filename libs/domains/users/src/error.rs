use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Lookup miss, keyed by email or id
    #[error("user {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("failed to issue token: {0}")]
    Token(String),

    /// Raw message from the store, forwarded as-is
    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(err.to_string()),
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            UserError::Token(_) => AppError::InternalServerError(err.to_string()),
            UserError::Storage(msg) | UserError::Internal(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        UserError::Storage(err.to_string())
    }
}
