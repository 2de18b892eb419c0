//! Review creation and per-car listing

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::review::{Review, MAX_RATING, MIN_RATING};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::ReviewRepository;

/// Service for creating and listing reviews
pub struct ReviewService<R>
where
    R: ReviewRepository,
{
    review_repository: Arc<R>,
}

impl<R> ReviewService<R>
where
    R: ReviewRepository,
{
    /// Create a new review service
    pub fn new(review_repository: Arc<R>) -> Self {
        Self { review_repository }
    }

    /// Attach a review to a car
    ///
    /// The rating must be in [1, 5]; the check runs before any persistence
    /// call. Reviews are immutable once stored.
    pub async fn add_review(
        &self,
        car_id: Uuid,
        renter_id: Uuid,
        rating: i32,
        comment: Option<String>,
    ) -> DomainResult<Review> {
        if !Review::is_valid_rating(rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING as i64,
                max: MAX_RATING as i64,
            }
            .into());
        }

        let review = Review::new(renter_id, car_id, rating, comment);
        let stored = self.review_repository.create(review).await?;
        info!(review_id = %stored.id, car_id = %car_id, rating, "review added");
        Ok(stored)
    }

    /// List reviews for a car, oldest first
    pub async fn list_for_car(&self, car_id: Uuid) -> DomainResult<Vec<Review>> {
        self.review_repository.find_by_car(car_id).await
    }
}
