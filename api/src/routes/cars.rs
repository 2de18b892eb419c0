//! Car listing creation and search

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::car::{AddCarRequest, CarSearchQuery};
use crate::handlers::error::{domain_error_response, validation_failure_response};
use crate::middleware::auth::AuthContext;

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::PaymentGateway;

use super::AppState;

/// Handler for POST /api/v1/cars/add (authenticated)
///
/// The caller becomes the listing's owner.
pub async fn add<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    auth: AuthContext,
    request: web::Json<AddCarRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure_response(&errors);
    }

    let availability = match request.parse_availability() {
        Ok(windows) => windows,
        Err(error) => return domain_error_response(&error),
    };

    match state
        .car_service
        .add_car(
            auth.user_id,
            &request.model,
            request.year,
            availability,
            request.price_cents,
            &request.location,
        )
        .await
    {
        Ok(car) => HttpResponse::Created().json(car),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/v1/cars
///
/// Optional `location`, `start_date`, and `end_date` query parameters; the
/// date pair narrows results only when both ends are present.
pub async fn search<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    query: web::Query<CarSearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    let dates = match query.parse_dates() {
        Ok(dates) => dates,
        Err(error) => return domain_error_response(&error),
    };
    let (start, end) = match dates {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    match state
        .car_service
        .search_cars(query.location.as_deref(), start, end)
        .await
    {
        Ok(cars) => HttpResponse::Ok().json(cars),
        Err(error) => domain_error_response(&error),
    }
}
