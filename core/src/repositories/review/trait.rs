//! Review repository trait defining the interface for review persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

/// Repository trait for Review entity persistence operations
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a new review
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    /// List reviews for a specific car, oldest first
    async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<Review>, DomainError>;
}
