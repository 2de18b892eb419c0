//! Registration, login, and user administration

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user
    pub user: User,
    /// Signed access token
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service for registration and login
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new user
    ///
    /// Validates every field before touching the store, rejects duplicate
    /// emails, hashes the password with bcrypt, and persists the user.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        self.validate_registration(name, email, phone, password)?;

        if self
            .user_repository
            .find_by_email(email)
            .await?
            .is_some()
        {
            warn!(email = %email, "registration rejected: email already in use");
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost)?;
        let user = User::new(
            name.to_string(),
            email.to_string(),
            phone.to_string(),
            password_hash,
            role,
        );

        let stored = self.user_repository.create(user).await?;
        info!(user_id = %stored.id, role = %stored.role.as_str(), "user registered");
        Ok(stored)
    }

    /// Authenticate a user and issue an access token
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.issue_access_token(user.id, user.role)?;
        info!(user_id = %user.id, "user logged in");

        Ok(LoginOutcome {
            user,
            access_token,
            expires_in: self.token_service.expires_in_seconds(),
        })
    }

    /// Delete a user by id
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// List all registered users
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    fn validate_registration(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> DomainResult<()> {
        if !ws_shared::validation::not_empty(name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !ws_shared::validation::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !ws_shared::validation::is_valid_phone(phone) {
            return Err(ValidationError::InvalidFormat {
                field: "phone".to_string(),
            }
            .into());
        }
        if password.len() < self.config.min_password_length {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }
        Ok(())
    }
}
