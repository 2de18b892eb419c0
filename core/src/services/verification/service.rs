//! PAN verification against the user record

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Service for PAN-based user verification
pub struct VerificationService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> VerificationService<U>
where
    U: UserRepository,
{
    /// Create a new verification service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Verify a user's PAN and mark them verified on success
    ///
    /// The check is a format check only; no registrar is consulted.
    pub async fn verify_pan(&self, user_id: Uuid, pan_number: &str) -> DomainResult<()> {
        if !ws_shared::validation::is_valid_pan(pan_number) {
            return Err(ValidationError::InvalidPanFormat.into());
        }

        if !self.user_repository.mark_verified(user_id).await? {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        info!(user_id = %user_id, "user PAN verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::{User, UserRole};
    use crate::repositories::MockUserRepository;

    async fn fixture() -> (VerificationService<MockUserRepository>, User) {
        let repo = Arc::new(MockUserRepository::new());
        let user = repo
            .create(User::new(
                "Asha".to_string(),
                "asha@example.com".to_string(),
                "+919876543210".to_string(),
                "hash".to_string(),
                UserRole::Renter,
            ))
            .await
            .unwrap();
        (VerificationService::new(Arc::clone(&repo)), user)
    }

    #[tokio::test]
    async fn valid_pan_marks_the_user_verified() {
        let (service, user) = fixture().await;
        service.verify_pan(user.id, "ABCDE1234F").await.unwrap();
    }

    #[tokio::test]
    async fn malformed_pan_is_rejected_without_update() {
        let (service, user) = fixture().await;
        let result = service.verify_pan(user.id, "abcde1234f").await;
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::InvalidPanFormat))
        ));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (service, _) = fixture().await;
        let result = service.verify_pan(Uuid::new_v4(), "ABCDE1234F").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
