//! Review entity attaching a renter's rating to a car.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// Review entity; immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: Uuid,

    /// Renter who wrote the review
    pub renter_id: Uuid,

    /// Car being reviewed
    pub car_id: Uuid,

    /// Rating in [1, 5]
    pub rating: i32,

    /// Optional free-text comment
    pub comment: Option<String>,

    /// Timestamp when the review was created
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new Review with a fresh identifier
    pub fn new(renter_id: Uuid, car_id: Uuid, rating: i32, comment: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            renter_id,
            car_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }

    /// Whether a rating value is within the accepted range
    pub fn is_valid_rating(rating: i32) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(Review::is_valid_rating(1));
        assert!(Review::is_valid_rating(5));
        assert!(!Review::is_valid_rating(0));
        assert!(!Review::is_valid_rating(6));
        assert!(!Review::is_valid_rating(-3));
    }

    #[test]
    fn comment_is_optional() {
        let review = Review::new(Uuid::new_v4(), Uuid::new_v4(), 4, None);
        assert!(review.comment.is_none());
    }
}
