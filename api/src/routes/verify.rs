//! PAN verification

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::verify::VerifyPanRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};
use crate::middleware::auth::AuthContext;

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::PaymentGateway;

use super::AppState;

/// Handler for POST /api/v1/verify/pan (authenticated)
///
/// Format check only; a match marks the caller verified.
pub async fn pan<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    auth: AuthContext,
    request: web::Json<VerifyPanRequest>,
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
        .verification_service
        .verify_pan(auth.user_id, &request.pan_number)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "PAN verified successfully"
        })),
        Err(error) => domain_error_response(&error),
    }
}
