use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use ws_core::domain::value_objects::DateRange;
use ws_core::errors::DomainResult;

use super::parse_utc_range;

/// One availability window on a listing request, RFC 3339 endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlotDto {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCarRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub model: String,

    pub year: i32,

    #[validate(length(min = 1, message = "must contain at least one window"))]
    pub availability: Vec<AvailabilitySlotDto>,

    /// Price per day in minor currency units
    pub price_cents: i64,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
}

impl AddCarRequest {
    /// Parse the availability windows, rejecting empty and inverted ranges
    pub fn parse_availability(&self) -> DomainResult<Vec<DateRange>> {
        self.availability
            .iter()
            .map(|slot| {
                let (start, end) = parse_utc_range(
                    "availability.start_date",
                    &slot.start_date,
                    "availability.end_date",
                    &slot.end_date,
                )?;
                Ok(DateRange::new(start, end))
            })
            .collect()
    }
}

/// Query parameters for GET /cars
///
/// The date pair narrows results only when both ends are present.
#[derive(Debug, Clone, Deserialize)]
pub struct CarSearchQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl CarSearchQuery {
    /// Parse the optional date pair; `None` unless both ends are given
    pub fn parse_dates(&self) -> DomainResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => {
                parse_utc_range("start_date", start, "end_date", end).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_windows_parse_in_order() {
        let request = AddCarRequest {
            model: "Swift".to_string(),
            year: 2020,
            availability: vec![
                AvailabilitySlotDto {
                    start_date: "2025-06-01T00:00:00Z".to_string(),
                    end_date: "2025-06-10T00:00:00Z".to_string(),
                },
                AvailabilitySlotDto {
                    start_date: "2025-07-01T00:00:00Z".to_string(),
                    end_date: "2025-07-10T00:00:00Z".to_string(),
                },
            ],
            price_cents: 250_00,
            location: "Pune".to_string(),
        };

        let windows = request.parse_availability().unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows[0].start < windows[1].start);
    }

    #[test]
    fn search_dates_require_both_ends() {
        let query = CarSearchQuery {
            location: Some("Pune".to_string()),
            start_date: Some("2025-06-01T00:00:00Z".to_string()),
            end_date: None,
        };
        assert!(query.parse_dates().unwrap().is_none());
    }
}
