use super::config::JwtConfig;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Default token lifetime: 15 minutes
pub const DEFAULT_TOKEN_TTL: i64 = 900;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,  // Subject (user ID)
    pub name: String, // User name
    pub iat: i64,     // Issued at
    pub exp: i64,     // Expiration time
}

/// Stateless HS256 token issuer and verifier.
///
/// Built once at startup from [`JwtConfig`] and handed to whoever needs it
/// through router state.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_seconds = config.expires_in, "JWT auth initialized");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: config.expires_in,
        }
    }

    /// Configured token lifetime in seconds
    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Create an access token with the configured TTL
    pub fn issue_access_token(&self, subject_id: &str, name: &str) -> eyre::Result<String> {
        self.issue_token(subject_id, name, self.ttl)
    }

    /// Create a token with `exp = iat + ttl_seconds`
    pub fn issue_token(&self, subject_id: &str, name: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let iat = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: subject_id.to_string(),
            name: name.to_string(),
            iat,
            exp: iat + ttl_seconds,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verify signature and expiry, then decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<JwtClaims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}
