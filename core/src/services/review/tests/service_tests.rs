//! Unit tests for review attachment

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockReviewRepository;
use crate::services::review::ReviewService;

fn service() -> ReviewService<MockReviewRepository> {
    ReviewService::new(Arc::new(MockReviewRepository::new()))
}

#[tokio::test]
async fn review_with_valid_rating_is_stored() {
    let service = service();
    let car_id = Uuid::new_v4();

    let review = service
        .add_review(car_id, Uuid::new_v4(), 4, Some("Smooth ride".to_string()))
        .await
        .unwrap();

    assert_eq!(review.rating, 4);
    let listed = service.list_for_car(car_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].comment.as_deref(), Some("Smooth ride"));
}

#[tokio::test]
async fn out_of_range_rating_is_rejected_before_persistence() {
    let service = service();
    let car_id = Uuid::new_v4();

    for rating in [0, 6, -1] {
        let result = service.add_review(car_id, Uuid::new_v4(), rating, None).await;
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
        ));
    }

    assert!(service.list_for_car(car_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_scoped_to_the_car() {
    let service = service();
    let car_a = Uuid::new_v4();
    let car_b = Uuid::new_v4();

    service.add_review(car_a, Uuid::new_v4(), 5, None).await.unwrap();
    service.add_review(car_b, Uuid::new_v4(), 2, None).await.unwrap();

    let reviews = service.list_for_car(car_a).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 5);
}
