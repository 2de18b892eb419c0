//! MySQL implementation of the CarRepository trait.
//!
//! Availability windows live in a JSON column so their count and order
//! survive the round trip exactly as listed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ws_core::domain::entities::car::Car;
use ws_core::domain::value_objects::DateRange;
use ws_core::errors::DomainError;
use ws_core::repositories::CarRepository;

/// MySQL implementation of CarRepository
pub struct MySqlCarRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCarRepository {
    /// Create a new MySQL car repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Car entity
    fn row_to_car(row: &sqlx::mysql::MySqlRow) -> Result<Car, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::Database(format!("Failed to get owner_id: {}", e)))?;

        let availability_json: serde_json::Value = row
            .try_get("availability")
            .map_err(|e| DomainError::Database(format!("Failed to get availability: {}", e)))?;
        let availability: Vec<DateRange> = serde_json::from_value(availability_json)
            .map_err(|e| DomainError::Database(format!("Invalid availability JSON: {}", e)))?;

        Ok(Car {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            model: row
                .try_get("model")
                .map_err(|e| DomainError::Database(format!("Failed to get model: {}", e)))?,
            year: row
                .try_get("year")
                .map_err(|e| DomainError::Database(format!("Failed to get year: {}", e)))?,
            availability,
            price_cents: row
                .try_get("price_cents")
                .map_err(|e| DomainError::Database(format!("Failed to get price_cents: {}", e)))?,
            location: row
                .try_get("location")
                .map_err(|e| DomainError::Database(format!("Failed to get location: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl CarRepository for MySqlCarRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, DomainError> {
        let query = r#"
            SELECT id, owner_id, model, year, availability, price_cents,
                   location, created_at
            FROM cars
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_car(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, car: Car) -> Result<Car, DomainError> {
        let availability_json = serde_json::to_value(&car.availability)
            .map_err(|e| DomainError::Database(format!("Availability serialization: {}", e)))?;

        let query = r#"
            INSERT INTO cars (id, owner_id, model, year, availability,
                              price_cents, location, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(car.id.to_string())
            .bind(car.owner_id.to_string())
            .bind(&car.model)
            .bind(car.year)
            .bind(availability_json)
            .bind(car.price_cents)
            .bind(&car.location)
            .bind(car.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create car: {}", e)))?;

        Ok(car)
    }

    async fn search_by_location(&self, location: Option<&str>) -> Result<Vec<Car>, DomainError> {
        let rows = match location {
            Some(query_str) => {
                let query = r#"
                    SELECT id, owner_id, model, year, availability, price_cents,
                           location, created_at
                    FROM cars
                    WHERE LOWER(location) LIKE ?
                    ORDER BY created_at
                "#;
                sqlx::query(query)
                    .bind(format!("%{}%", query_str.to_lowercase()))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = r#"
                    SELECT id, owner_id, model, year, availability, price_cents,
                           location, created_at
                    FROM cars
                    ORDER BY created_at
                "#;
                sqlx::query(query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_car).collect()
    }
}
