//! JWT configuration, loaded via [`FromEnv`] like the other config structs.

use super::jwt::DEFAULT_TOKEN_TTL;
use core_config::{ConfigError, FromEnv, env_parse_or, env_required};

pub const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required): at least 32 characters
/// - `JWT_EXPIRES_IN` (optional): token lifetime in seconds, defaults to 900
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl JwtConfig {
    /// Build a config with the default token lifetime.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;
        Ok(Self {
            secret,
            expires_in: DEFAULT_TOKEN_TTL,
        })
    }

    pub fn with_expires_in(mut self, seconds: i64) -> Self {
        self.expires_in = seconds;
        self
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                MIN_SECRET_LEN,
                secret.len()
            ),
        });
    }
    Ok(())
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        check_secret(&secret)?;

        let expires_in: i64 = env_parse_or("JWT_EXPIRES_IN", DEFAULT_TOKEN_TTL)?;
        if expires_in <= 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_EXPIRES_IN".to_string(),
                details: format!("must be a positive number of seconds (got {})", expires_in),
            });
        }

        Ok(Self { secret, expires_in })
    }
}
