//! Car entity representing a listed vehicle and its availability windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{is_bookable, DateRange};

/// Oldest model year accepted for a listing
pub const MIN_CAR_YEAR: i32 = 1990;

/// How many years past the current year a model year may be
pub const MAX_CAR_YEAR_AHEAD: i32 = 1;

/// Car entity representing a listed vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier for the car
    pub id: Uuid,

    /// User who listed the car
    pub owner_id: Uuid,

    /// Model description (e.g. "Honda City")
    pub model: String,

    /// Model year
    pub year: i32,

    /// Ordered availability windows, fixed at creation.
    ///
    /// Windows are never subtracted from when a booking is accepted; the
    /// booking service re-runs the containment check against this list on
    /// every request.
    pub availability: Vec<DateRange>,

    /// Rental price in minor currency units per day
    pub price_cents: i64,

    /// Pickup location
    pub location: String,

    /// Timestamp when the car was listed
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Creates a new Car listing with a fresh identifier
    pub fn new(
        owner_id: Uuid,
        model: String,
        year: i32,
        availability: Vec<DateRange>,
        price_cents: i64,
        location: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            model,
            year,
            availability,
            price_cents,
            location,
            created_at: Utc::now(),
        }
    }

    /// Whether this car can satisfy a booking for `[start, end)`
    pub fn is_available_for(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        is_bookable(&self.availability, start, end)
    }

    /// Case-insensitive substring match on the pickup location
    pub fn matches_location(&self, query: &str) -> bool {
        self.location.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap()
    }

    fn sample_car() -> Car {
        Car::new(
            Uuid::new_v4(),
            "Honda City".to_string(),
            2021,
            vec![DateRange::new(date(1), date(10))],
            350000,
            "Pune".to_string(),
        )
    }

    #[test]
    fn availability_delegates_to_containment() {
        let car = sample_car();
        assert!(car.is_available_for(date(2), date(5)));
        assert!(!car.is_available_for(date(8), date(12)));
    }

    #[test]
    fn location_match_is_case_insensitive() {
        let car = sample_car();
        assert!(car.matches_location("pune"));
        assert!(car.matches_location("PUN"));
        assert!(!car.matches_location("Mumbai"));
    }

    #[test]
    fn windows_preserve_insertion_order() {
        let windows = vec![
            DateRange::new(date(10), date(12)),
            DateRange::new(date(1), date(5)),
        ];
        let car = Car::new(
            Uuid::new_v4(),
            "Swift".to_string(),
            2019,
            windows.clone(),
            120000,
            "Mumbai".to_string(),
        );
        assert_eq!(car.availability, windows);
    }
}
