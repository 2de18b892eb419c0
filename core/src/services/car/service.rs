//! Car listing creation and search

use chrono::{DateTime, Datelike, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::car::{Car, MAX_CAR_YEAR_AHEAD, MIN_CAR_YEAR};
use crate::domain::value_objects::DateRange;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::CarRepository;

/// Service for creating and searching car listings
pub struct CarService<C>
where
    C: CarRepository,
{
    car_repository: Arc<C>,
}

impl<C> CarService<C>
where
    C: CarRepository,
{
    /// Create a new car service
    pub fn new(car_repository: Arc<C>) -> Self {
        Self { car_repository }
    }

    /// List a new car
    ///
    /// The availability windows are fixed at creation: accepted bookings
    /// never subtract from them.
    pub async fn add_car(
        &self,
        owner_id: Uuid,
        model: &str,
        year: i32,
        availability: Vec<DateRange>,
        price_cents: i64,
        location: &str,
    ) -> DomainResult<Car> {
        self.validate_listing(model, year, &availability, price_cents, location)?;

        let car = Car::new(
            owner_id,
            model.to_string(),
            year,
            availability,
            price_cents,
            location.to_string(),
        );
        let stored = self.car_repository.create(car).await?;
        info!(car_id = %stored.id, owner_id = %owner_id, "car listed");
        Ok(stored)
    }

    /// Search listings by location, optionally narrowed to cars that can
    /// satisfy a requested `[start, end)` range.
    ///
    /// The date pair is applied only when both ends are present, matching
    /// the search contract of the listing endpoint.
    pub async fn search_cars(
        &self,
        location: Option<&str>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> DomainResult<Vec<Car>> {
        let cars = self.car_repository.search_by_location(location).await?;

        let filtered = match (start, end) {
            (Some(start), Some(end)) => cars
                .into_iter()
                .filter(|car| car.is_available_for(start, end))
                .collect(),
            _ => cars,
        };
        Ok(filtered)
    }

    /// Fetch a single car by id
    pub async fn find_car(&self, id: Uuid) -> DomainResult<Option<Car>> {
        self.car_repository.find_by_id(id).await
    }

    fn validate_listing(
        &self,
        model: &str,
        year: i32,
        availability: &[DateRange],
        price_cents: i64,
        location: &str,
    ) -> DomainResult<()> {
        if !ws_shared::validation::not_empty(model) {
            return Err(ValidationError::RequiredField {
                field: "model".to_string(),
            }
            .into());
        }
        if !ws_shared::validation::not_empty(location) {
            return Err(ValidationError::RequiredField {
                field: "location".to_string(),
            }
            .into());
        }

        let max_year = Utc::now().year() + MAX_CAR_YEAR_AHEAD;
        if year < MIN_CAR_YEAR || year > max_year {
            return Err(ValidationError::OutOfRange {
                field: "year".to_string(),
                min: MIN_CAR_YEAR as i64,
                max: max_year as i64,
            }
            .into());
        }

        if availability.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "availability".to_string(),
            }
            .into());
        }
        if availability.iter().any(|slot| !slot.is_well_formed()) {
            return Err(ValidationError::InvalidDateRange.into());
        }

        if price_cents <= 0 {
            return Err(ValidationError::InvalidAmount.into());
        }

        Ok(())
    }
}
