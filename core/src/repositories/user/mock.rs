//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository backed by a HashMap
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.verify();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;

    fn sample_user(email: &str) -> User {
        User::new(
            "Asha".to_string(),
            email.to_string(),
            "+919876543210".to_string(),
            "hash".to_string(),
            UserRole::Renter,
        )
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("a@example.com")).await.unwrap();

        let result = repo.create(sample_user("a@example.com")).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
        ));
    }

    #[tokio::test]
    async fn mark_verified_reports_missing_user() {
        let repo = MockUserRepository::new();
        assert!(!repo.mark_verified(Uuid::new_v4()).await.unwrap());

        let user = repo.create(sample_user("b@example.com")).await.unwrap();
        assert!(repo.mark_verified(user.id).await.unwrap());
        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(stored.is_verified);
    }

    #[tokio::test]
    async fn delete_is_idempotent_on_missing() {
        let repo = MockUserRepository::new();
        let user = repo.create(sample_user("c@example.com")).await.unwrap();
        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
    }
}
