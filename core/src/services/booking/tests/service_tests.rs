//! Unit tests for booking acceptance and cancellation

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::car::Car;
use crate::domain::value_objects::DateRange;
use crate::errors::{BookingError, DomainError, ValidationError};
use crate::repositories::{
    BookingRepository, CarRepository, MockBookingRepository, MockCarRepository,
};
use crate::services::booking::BookingService;

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, 0, 0, 0).unwrap()
}

struct Fixture {
    service: BookingService<MockCarRepository, MockBookingRepository>,
    bookings: Arc<MockBookingRepository>,
    cars: Arc<MockCarRepository>,
}

fn fixture() -> Fixture {
    let cars = Arc::new(MockCarRepository::new());
    let bookings = Arc::new(MockBookingRepository::new());
    Fixture {
        service: BookingService::new(Arc::clone(&cars), Arc::clone(&bookings)),
        bookings,
        cars,
    }
}

async fn listed_car(cars: &MockCarRepository, windows: Vec<DateRange>) -> Car {
    let car = Car::new(
        Uuid::new_v4(),
        "Honda City".to_string(),
        2021,
        windows,
        350000,
        "Pune".to_string(),
    );
    cars.create(car).await.unwrap()
}

#[tokio::test]
async fn contained_request_creates_a_booking() {
    let fx = fixture();
    let car = listed_car(&fx.cars, vec![DateRange::new(date(1), date(10))]).await;
    let renter = Uuid::new_v4();

    let booking = fx
        .service
        .create_booking(car.id, renter, date(3), date(7))
        .await
        .unwrap();

    assert_eq!(booking.car_id, car.id);
    assert_eq!(booking.renter_id, renter);
    assert_eq!(fx.bookings.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_car_fails_with_not_found_and_persists_nothing() {
    let fx = fixture();

    let result = fx
        .service
        .create_booking(Uuid::new_v4(), Uuid::new_v4(), date(3), date(7))
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert!(fx.bookings.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn request_spanning_adjacent_windows_is_rejected() {
    let fx = fixture();
    let car = listed_car(
        &fx.cars,
        vec![
            DateRange::new(date(1), date(5)),
            DateRange::new(date(5), date(10)),
        ],
    )
    .await;

    let result = fx
        .service
        .create_booking(car.id, Uuid::new_v4(), date(3), date(7))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Booking(BookingError::CarNotAvailable))
    ));
    assert!(fx.bookings.find_all().await.unwrap().is_empty());
}

// Availability is never decremented when a booking is accepted, so a second
// identical request also succeeds. This documents the platform's behaviour;
// do not "fix" it here.
#[tokio::test]
async fn overlapping_sequential_bookings_both_succeed() {
    let fx = fixture();
    let car = listed_car(&fx.cars, vec![DateRange::new(date(1), date(10))]).await;

    let first = fx
        .service
        .create_booking(car.id, Uuid::new_v4(), date(2), date(6))
        .await
        .unwrap();
    let second = fx
        .service
        .create_booking(car.id, Uuid::new_v4(), date(2), date(6))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(fx.bookings.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn inverted_or_zero_length_request_is_rejected_before_lookup() {
    let fx = fixture();
    let car = listed_car(&fx.cars, vec![DateRange::new(date(1), date(10))]).await;

    let inverted = fx
        .service
        .create_booking(car.id, Uuid::new_v4(), date(7), date(3))
        .await;
    assert!(matches!(
        inverted,
        Err(DomainError::ValidationErr(ValidationError::InvalidDateRange))
    ));

    let zero_length = fx
        .service
        .create_booking(car.id, Uuid::new_v4(), date(3), date(3))
        .await;
    assert!(matches!(
        zero_length,
        Err(DomainError::ValidationErr(ValidationError::InvalidDateRange))
    ));
}

#[tokio::test]
async fn only_the_renter_may_cancel() {
    let fx = fixture();
    let car = listed_car(&fx.cars, vec![DateRange::new(date(1), date(10))]).await;
    let renter = Uuid::new_v4();
    let booking = fx
        .service
        .create_booking(car.id, renter, date(2), date(6))
        .await
        .unwrap();

    let forbidden = fx.service.cancel_booking(booking.id, Uuid::new_v4()).await;
    assert!(matches!(
        forbidden,
        Err(DomainError::Booking(BookingError::NotBookingRenter))
    ));
    // The booking is left intact
    assert_eq!(fx.bookings.find_all().await.unwrap().len(), 1);

    fx.service.cancel_booking(booking.id, renter).await.unwrap();
    assert!(fx.bookings.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn cancelling_a_missing_booking_is_not_found() {
    let fx = fixture();
    let result = fx.service.cancel_booking(Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
