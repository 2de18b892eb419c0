//! Review creation and per-car listing

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::review::CreateReviewRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};
use crate::middleware::auth::AuthContext;

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::PaymentGateway;

use super::AppState;

/// Handler for POST /api/v1/reviews (authenticated)
pub async fn create<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    auth: AuthContext,
    request: web::Json<CreateReviewRequest>,
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

    match state
        .review_service
        .add_review(
            request.car_id,
            auth.user_id,
            request.rating,
            request.comment.clone(),
        )
        .await
    {
        Ok(review) => HttpResponse::Created().json(review),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/v1/reviews/{car_id}
pub async fn list_for_car<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    match state.review_service.list_for_car(path.into_inner()).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(error) => domain_error_response(&error),
    }
}
