//! In-memory implementation of ReviewRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

use super::trait_::ReviewRepository;

/// Mock review repository backed by a Vec
#[derive(Default)]
pub struct MockReviewRepository {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl MockReviewRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        reviews.push(review.clone());
        Ok(review)
    }

    async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .filter(|r| r.car_id == car_id)
            .cloned()
            .collect())
    }
}
