use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{UserError, UserResult};

/// User entity
///
/// Registered once, never updated. `password` holds the argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Validate the fields, hash the password and assign a fresh id
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> UserResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(UserError::Validation("name is required".to_string()));
        }
        if email.is_empty() {
            return Err(UserError::Validation("email is required".to_string()));
        }
        if password.is_empty() {
            return Err(UserError::Validation("password is required".to_string()));
        }

        let password =
            identity::hash_password(password).map_err(|e| UserError::Validation(e.to_string()))?;

        Ok(Self {
            id: identity::new_id(),
            name,
            email,
            password,
        })
    }

    /// Check a candidate password against the stored hash
    pub fn verify(&self, candidate: &str) -> bool {
        identity::verify_password(candidate, &self.password)
    }
}

/// DTO for registering a user
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Credentials exchanged for an access token
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}
