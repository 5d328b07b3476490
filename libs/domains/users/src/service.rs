//! User Service - registration, lookup and credential checks

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let CreateUser {
            name,
            email,
            password,
        } = input;
        let user = tokio::task::spawn_blocking(move || User::new(name, email, &password))
            .await
            .map_err(|e| UserError::Internal(format!("task join error: {}", e)))??;
        self.repository.create(user.clone()).await?;
        Ok(user)
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Get a user by email
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<User> {
        self.repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }

    /// Look the user up by email and check the password
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<User> {
        let user = self.get_user_by_email(email).await?;

        // argon2 is CPU-bound; keep it off the async workers
        let candidate = password.to_owned();
        let (user, matches) = tokio::task::spawn_blocking(move || {
            let matches = user.verify(&candidate);
            (user, matches)
        })
        .await
        .map_err(|e| UserError::Internal(format!("task join error: {}", e)))?;

        if !matches {
            tracing::info!(user_id = %user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }
        Ok(user)
    }
}
