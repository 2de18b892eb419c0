//! MySQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ws_core::domain::entities::booking::Booking;
use ws_core::errors::DomainError;
use ws_core::repositories::BookingRepository;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let renter_id: String = row
            .try_get("renter_id")
            .map_err(|e| DomainError::Database(format!("Failed to get renter_id: {}", e)))?;
        let car_id: String = row
            .try_get("car_id")
            .map_err(|e| DomainError::Database(format!("Failed to get car_id: {}", e)))?;

        Ok(Booking {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            renter_id: Uuid::parse_str(&renter_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            car_id: Uuid::parse_str(&car_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            start_date: row
                .try_get::<DateTime<Utc>, _>("start_date")
                .map_err(|e| DomainError::Database(format!("Failed to get start_date: {}", e)))?,
            end_date: row
                .try_get::<DateTime<Utc>, _>("end_date")
                .map_err(|e| DomainError::Database(format!("Failed to get end_date: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = r#"
            SELECT id, renter_id, car_id, start_date, end_date, created_at
            FROM bookings
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            INSERT INTO bookings (id, renter_id, car_id, start_date, end_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.renter_id.to_string())
            .bind(booking.car_id.to_string())
            .bind(booking.start_date)
            .bind(booking.end_date)
            .bind(booking.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create booking: {}", e)))?;

        Ok(booking)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, DomainError> {
        let query = r#"
            SELECT id, renter_id, car_id, start_date, end_date, created_at
            FROM bookings
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete booking: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
