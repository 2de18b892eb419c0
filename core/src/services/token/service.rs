//! HS256 JWT issuing and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Role of the authenticated user ("owner" or "renter")
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Parses the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidClaims)
    }

    /// Parses the role claim
    pub fn user_role(&self) -> Result<UserRole, TokenError> {
        UserRole::parse(&self.role).ok_or(TokenError::InvalidClaims)
    }
}

/// Service for issuing and verifying access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token for the given user
    pub fn issue_access_token(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<String, DomainError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.config.expiry_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: self.config.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            }
        })?;
        Ok(data.claims)
    }

    /// Access token lifetime in seconds, for the login response body
    pub fn expires_in_seconds(&self) -> i64 {
        self.config.expiry_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            expiry_minutes: 60,
            issuer: "wheelshare".to_string(),
        })
    }

    #[test]
    fn issued_token_verifies_and_round_trips_identity() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service
            .issue_access_token(user_id, UserRole::Owner)
            .unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.user_role().unwrap(), UserRole::Owner);
        assert_eq!(claims.iss, "wheelshare");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new(TokenServiceConfig {
            jwt_secret: "other-secret".to_string(),
            ..TokenServiceConfig::default()
        });
        let token = issuer
            .issue_access_token(Uuid::new_v4(), UserRole::Renter)
            .unwrap();

        let result = service().verify_access_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = service().verify_access_token("not.a.jwt");
        assert!(matches!(result, Err(DomainError::Token(_))));
    }

    #[test]
    fn claims_with_unknown_role_fail_parsing() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: "admin".to_string(),
            iat: 0,
            exp: 0,
            iss: "wheelshare".to_string(),
            jti: Uuid::new_v4().to_string(),
        };
        assert_eq!(claims.user_role(), Err(TokenError::InvalidClaims));
    }
}
