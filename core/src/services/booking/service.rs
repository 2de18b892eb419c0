//! Booking acceptance, cancellation, and listing

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{BookingError, DomainError, DomainResult, ValidationError};
use crate::repositories::{BookingRepository, CarRepository};

/// Service for the booking ledger.
///
/// The availability check and the insert are two separate store operations
/// with no cross-request locking, and accepted bookings never subtract from
/// the car's windows. Two requests for the same contained range therefore
/// both succeed, sequentially or concurrently. This mirrors the platform's
/// documented non-decrementing model and is asserted by a regression test.
pub struct BookingService<C, B>
where
    C: CarRepository,
    B: BookingRepository,
{
    car_repository: Arc<C>,
    booking_repository: Arc<B>,
}

impl<C, B> BookingService<C, B>
where
    C: CarRepository,
    B: BookingRepository,
{
    /// Create a new booking service
    pub fn new(car_repository: Arc<C>, booking_repository: Arc<B>) -> Self {
        Self {
            car_repository,
            booking_repository,
        }
    }

    /// Create a booking for `[start, end)` on the given car
    ///
    /// Fails with NotFound when the car does not exist and with
    /// [`BookingError::CarNotAvailable`] when no single availability window
    /// contains the requested range.
    pub async fn create_booking(
        &self,
        car_id: Uuid,
        renter_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Booking> {
        if start >= end {
            return Err(ValidationError::InvalidDateRange.into());
        }

        let car = self
            .car_repository
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Car".to_string(),
            })?;

        if !car.is_available_for(start, end) {
            warn!(car_id = %car_id, "booking rejected: range not contained in any window");
            return Err(BookingError::CarNotAvailable.into());
        }

        let booking = Booking::new(renter_id, car_id, start, end);
        let stored = self.booking_repository.create(booking).await?;
        info!(booking_id = %stored.id, car_id = %car_id, renter_id = %renter_id, "booking created");
        Ok(stored)
    }

    /// Cancel a booking; only its renter may do so
    pub async fn cancel_booking(&self, booking_id: Uuid, requester_id: Uuid) -> DomainResult<()> {
        let booking = self
            .booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Booking".to_string(),
            })?;

        if !booking.is_owned_by(requester_id) {
            warn!(booking_id = %booking_id, requester_id = %requester_id, "cancellation forbidden");
            return Err(BookingError::NotBookingRenter.into());
        }

        self.booking_repository.delete(booking_id).await?;
        info!(booking_id = %booking_id, "booking cancelled");
        Ok(())
    }

    /// List every booking in the ledger
    pub async fn list_bookings(&self) -> DomainResult<Vec<Booking>> {
        self.booking_repository.find_all().await
    }
}
