//! Booking creation, listing, and cancellation

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::booking::CreateBookingRequest;
use crate::dto::parse_utc_range;
use crate::handlers::error::domain_error_response;
use crate::middleware::auth::AuthContext;

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::PaymentGateway;

use super::AppState;

/// Handler for POST /api/v1/bookings (authenticated)
///
/// The caller becomes the booking's renter. Succeeds only when the
/// requested range lies wholly inside one of the car's availability
/// windows.
pub async fn create<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    auth: AuthContext,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    let (start, end) = match parse_utc_range(
        "start_date",
        &request.start_date,
        "end_date",
        &request.end_date,
    ) {
        Ok(range) => range,
        Err(error) => return domain_error_response(&error),
    };

    match state
        .booking_service
        .create_booking(request.car_id, auth.user_id, start, end)
        .await
    {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/v1/bookings
pub async fn list<U, C, B, R, G>(state: web::Data<AppState<U, C, B, R, G>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    match state.booking_service.list_bookings().await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for DELETE /api/v1/bookings/{id} (authenticated)
///
/// Only the renter who created the booking may cancel it.
pub async fn cancel<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    match state
        .booking_service
        .cancel_booking(path.into_inner(), auth.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Booking cancelled successfully"
        })),
        Err(error) => domain_error_response(&error),
    }
}
