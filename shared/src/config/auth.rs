//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// JWT and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens (HS256)
    pub jwt_secret: String,

    /// Access token expiry time in minutes
    pub token_expiry_minutes: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_SECRET),
            token_expiry_minutes: 60,
            issuer: String::from("wheelshare"),
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with the given secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables (`JWT_SECRET`, `TOKEN_EXPIRY_MINUTES`,
    /// `BCRYPT_COST`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret);
        let token_expiry_minutes = std::env::var("TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.token_expiry_minutes);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bcrypt_cost);

        Self {
            jwt_secret,
            token_expiry_minutes,
            bcrypt_cost,
            ..defaults
        }
    }

    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}
