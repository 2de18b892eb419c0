use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for POST /bookings; dates are RFC 3339, interpreted `[start, end)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub car_id: Uuid,
    pub start_date: String,
    pub end_date: String,
}
