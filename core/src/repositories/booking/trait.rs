//! Booking repository trait defining the interface for the booking ledger.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

/// Repository trait for Booking ledger persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Persist a new booking
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// List every booking in the ledger
    async fn find_all(&self) -> Result<Vec<Booking>, DomainError>;

    /// Delete a booking by id
    ///
    /// Returns `true` when a booking was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
