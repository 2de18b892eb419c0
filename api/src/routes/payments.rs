//! Payment charging: real gateway and the dummy processor

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::payment::{ChargeRequest, DummyPaymentRequest};
use crate::handlers::error::{domain_error_response, validation_failure_response};

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::PaymentGateway;

use super::AppState;

/// Handler for POST /api/v1/payments
///
/// Charges the supplied source token through the external gateway.
pub async fn charge<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    request: web::Json<ChargeRequest>,
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
        .payment_service
        .charge(
            request.amount_cents,
            &request.currency,
            &request.source_token,
        )
        .await
    {
        Ok(charge) => HttpResponse::Ok().json(charge),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/v1/dummy-payments
///
/// Simulates a successful payment and returns a synthetic receipt.
pub async fn dummy<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    request: web::Json<DummyPaymentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    match state.dummy_payments.process(
        request.user_id,
        request.amount_cents,
        &request.currency,
    ) {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(error) => domain_error_response(&error),
    }
}
