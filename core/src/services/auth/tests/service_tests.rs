//! Unit tests for registration and login

use std::sync::Arc;

use crate::domain::entities::user::UserRole;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> AuthService<MockUserRepository> {
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..TokenServiceConfig::default()
    }));
    let config = AuthServiceConfig {
        // Minimum cost keeps hashing fast in tests
        bcrypt_cost: 4,
        ..AuthServiceConfig::default()
    };
    AuthService::new(Arc::new(MockUserRepository::new()), token_service, config)
}

#[tokio::test]
async fn register_persists_a_hashed_password() {
    let service = service();

    let user = service
        .register(
            "Asha",
            "asha@example.com",
            "+919876543210",
            "hunter22",
            UserRole::Renter,
        )
        .await
        .unwrap();

    assert_ne!(user.password_hash, "hunter22");
    assert!(user.password_hash.starts_with("$2"));
    assert!(!user.is_verified);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let service = service();
    service
        .register(
            "Asha",
            "asha@example.com",
            "+919876543210",
            "hunter22",
            UserRole::Renter,
        )
        .await
        .unwrap();

    let result = service
        .register(
            "Another",
            "asha@example.com",
            "+919876543211",
            "hunter23",
            UserRole::Owner,
        )
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn register_validates_fields_before_persistence() {
    let service = service();

    let bad_email = service
        .register("Asha", "nope", "+919876543210", "hunter22", UserRole::Renter)
        .await;
    assert!(matches!(
        bad_email,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let short_password = service
        .register(
            "Asha",
            "asha@example.com",
            "+919876543210",
            "abc",
            UserRole::Renter,
        )
        .await;
    assert!(matches!(
        short_password,
        Err(DomainError::ValidationErr(
            ValidationError::PasswordTooShort { min: 6 }
        ))
    ));

    let blank_name = service
        .register(
            "  ",
            "asha@example.com",
            "+919876543210",
            "hunter22",
            UserRole::Renter,
        )
        .await;
    assert!(matches!(
        blank_name,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));

    // Nothing was persisted by the failed attempts
    assert!(service.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn login_issues_a_verifiable_token() {
    let service = service();
    let registered = service
        .register(
            "Asha",
            "asha@example.com",
            "+919876543210",
            "hunter22",
            UserRole::Owner,
        )
        .await
        .unwrap();

    let outcome = service.login("asha@example.com", "hunter22").await.unwrap();
    assert_eq!(outcome.user.id, registered.id);
    assert!(outcome.expires_in > 0);
    assert!(!outcome.access_token.is_empty());
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email() {
    let service = service();
    service
        .register(
            "Asha",
            "asha@example.com",
            "+919876543210",
            "hunter22",
            UserRole::Renter,
        )
        .await
        .unwrap();

    let wrong_password = service.login("asha@example.com", "wrong").await;
    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    let unknown_email = service.login("ghost@example.com", "hunter22").await;
    assert!(matches!(
        unknown_email,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn delete_user_reports_missing() {
    let service = service();
    let result = service.delete_user(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let user = service
        .register(
            "Asha",
            "asha@example.com",
            "+919876543210",
            "hunter22",
            UserRole::Renter,
        )
        .await
        .unwrap();
    service.delete_user(user.id).await.unwrap();
    assert!(service.list_users().await.unwrap().is_empty());
}
