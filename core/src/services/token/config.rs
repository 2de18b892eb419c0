//! Token service configuration

use ws_shared::config::AuthConfig;

/// JWT issuer claim value
pub const JWT_ISSUER: &str = "wheelshare";

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub expiry_minutes: i64,

    /// Issuer claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            expiry_minutes: 60,
            issuer: String::from(JWT_ISSUER),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            expiry_minutes: config.token_expiry_minutes,
            issuer: config.issuer.clone(),
        }
    }
}
