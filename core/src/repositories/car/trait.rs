//! Car repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::car::Car;
use crate::errors::DomainError;

/// Repository trait for Car entity persistence operations
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Find a car by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, DomainError>;

    /// Persist a new car listing
    ///
    /// Availability windows must be stored and read back in their original
    /// order.
    async fn create(&self, car: Car) -> Result<Car, DomainError>;

    /// List cars, optionally filtered by a case-insensitive location
    /// substring. Date filtering happens in the service layer against the
    /// availability windows.
    async fn search_by_location(&self, location: Option<&str>) -> Result<Vec<Car>, DomainError>;
}
