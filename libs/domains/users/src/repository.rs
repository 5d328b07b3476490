use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; a taken email is a storage error
    async fn create(&self, user: User) -> UserResult<()>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email (exact match)
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;
}

/// In-memory implementation of UserRepository (for testing and the `memory` backend)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<()> {
        let mut users = self.users.write().await;

        // Mirrors the unique index on users.email
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::Storage(
                "UNIQUE constraint failed: users.email".to_string(),
            ));
        }

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        users.insert(user.id, user);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("John", "j@j.com", "123456").unwrap();

        repo.create(user.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(repo.get_by_email("j@j.com").await.unwrap(), Some(user));
        assert!(repo.get_by_email("J@J.COM").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("John", "j@j.com", "123456").unwrap())
            .await
            .unwrap();

        let err = repo
            .create(User::new("Jane", "j@j.com", "654321").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Storage(_)));
    }
}
