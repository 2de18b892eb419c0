//! Booking entity recording an accepted rental.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking entity recording an accepted rental request.
///
/// A booking is created only after the requested range passed the
/// containment check against the car's availability windows. Accepting a
/// booking does not mutate those windows, so the ledger alone is what a
/// future conflict check would have to consult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// Renter who placed the booking
    pub renter_id: Uuid,

    /// Car being booked
    pub car_id: Uuid,

    /// Inclusive start of the rental
    pub start_date: DateTime<Utc>,

    /// Exclusive end of the rental
    pub end_date: DateTime<Utc>,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new Booking with a fresh identifier
    pub fn new(
        renter_id: Uuid,
        car_id: Uuid,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            renter_id,
            car_id,
            start_date,
            end_date,
            created_at: Utc::now(),
        }
    }

    /// Whether the given user placed this booking
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.renter_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ownership_matches_renter_only() {
        let renter = Uuid::new_v4();
        let booking = Booking::new(
            renter,
            Uuid::new_v4(),
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap(),
        );
        assert!(booking.is_owned_by(renter));
        assert!(!booking.is_owned_by(Uuid::new_v4()));
    }
}
