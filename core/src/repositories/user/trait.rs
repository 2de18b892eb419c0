//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Returns the stored user, or a validation error when the email is
    /// already registered.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// List every registered user
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user by id
    ///
    /// Returns `true` when a user was removed, `false` when no user with
    /// the given id existed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Set the `is_verified` flag on a user (field-level update)
    ///
    /// Returns `true` when the user existed and was updated.
    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError>;
}
