//! In-memory implementation of CarRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::car::Car;
use crate::errors::DomainError;

use super::trait_::CarRepository;

/// Mock car repository backed by a HashMap
#[derive(Default)]
pub struct MockCarRepository {
    cars: Arc<RwLock<HashMap<Uuid, Car>>>,
}

impl MockCarRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, DomainError> {
        let cars = self.cars.read().await;
        Ok(cars.get(&id).cloned())
    }

    async fn create(&self, car: Car) -> Result<Car, DomainError> {
        let mut cars = self.cars.write().await;
        cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn search_by_location(&self, location: Option<&str>) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.read().await;
        let mut matched: Vec<Car> = cars
            .values()
            .filter(|car| match location {
                Some(query) => car.matches_location(query),
                None => true,
            })
            .cloned()
            .collect();
        matched.sort_by_key(|c| c.created_at);
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::DateRange;
    use chrono::{TimeZone, Utc};

    fn sample_car(location: &str) -> Car {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        Car::new(
            Uuid::new_v4(),
            "Swift".to_string(),
            2020,
            vec![DateRange::new(start, end)],
            150000,
            location.to_string(),
        )
    }

    #[tokio::test]
    async fn search_without_filter_returns_everything() {
        let repo = MockCarRepository::new();
        repo.create(sample_car("Pune")).await.unwrap();
        repo.create(sample_car("Mumbai")).await.unwrap();

        let all = repo.search_by_location(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn search_filters_by_location_substring() {
        let repo = MockCarRepository::new();
        repo.create(sample_car("Pune")).await.unwrap();
        repo.create(sample_car("Mumbai")).await.unwrap();

        let matched = repo.search_by_location(Some("pun")).await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "Pune");
    }

    #[tokio::test]
    async fn stored_car_round_trips_windows_in_order() {
        let repo = MockCarRepository::new();
        let car = sample_car("Pune");
        let windows = car.availability.clone();
        let stored = repo.create(car).await.unwrap();

        let fetched = repo.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.availability, windows);
    }
}
