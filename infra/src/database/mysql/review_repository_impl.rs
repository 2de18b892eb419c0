//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ws_core::domain::entities::review::Review;
use ws_core::errors::DomainError;
use ws_core::repositories::ReviewRepository;

/// MySQL implementation of ReviewRepository
pub struct MySqlReviewRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    /// Create a new MySQL review repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Review entity
    fn row_to_review(row: &sqlx::mysql::MySqlRow) -> Result<Review, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let renter_id: String = row
            .try_get("renter_id")
            .map_err(|e| DomainError::Database(format!("Failed to get renter_id: {}", e)))?;
        let car_id: String = row
            .try_get("car_id")
            .map_err(|e| DomainError::Database(format!("Failed to get car_id: {}", e)))?;

        Ok(Review {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            renter_id: Uuid::parse_str(&renter_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            car_id: Uuid::parse_str(&car_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            rating: row
                .try_get("rating")
                .map_err(|e| DomainError::Database(format!("Failed to get rating: {}", e)))?,
            comment: row
                .try_get("comment")
                .map_err(|e| DomainError::Database(format!("Failed to get comment: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            INSERT INTO reviews (id, renter_id, car_id, rating, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.renter_id.to_string())
            .bind(review.car_id.to_string())
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create review: {}", e)))?;

        Ok(review)
    }

    async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let query = r#"
            SELECT id, renter_id, car_id, rating, comment, created_at
            FROM reviews
            WHERE car_id = ?
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(car_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_review).collect()
    }
}
