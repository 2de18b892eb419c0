//! Domain error to HTTP response mapping
//!
//! Every handler funnels failed service calls through [`domain_error_response`]
//! so the status codes and body shape stay uniform across the API. Store and
//! gateway failures are logged with full detail but answered with a generic
//! message.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use ws_core::errors::{AuthError, BookingError, DomainError};
use ws_shared::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::ValidationErr(validation) => HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error", validation.to_string()),
        ),
        DomainError::Auth(AuthError::InvalidCredentials) => HttpResponse::Unauthorized().json(
            ErrorResponse::new("invalid_credentials", error.to_string()),
        ),
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => HttpResponse::BadRequest().json(
            ErrorResponse::new("email_already_registered", error.to_string()),
        ),
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", error.to_string()))
        }
        DomainError::Auth(AuthError::MissingToken) | DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", error.to_string()))
        }
        DomainError::Token(token_error) => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_token",
            token_error.to_string(),
        )),
        DomainError::Booking(BookingError::CarNotAvailable) => HttpResponse::BadRequest().json(
            ErrorResponse::new("car_not_available", error.to_string()),
        ),
        DomainError::Booking(BookingError::NotBookingRenter) => {
            HttpResponse::Forbidden().json(ErrorResponse::new("forbidden", error.to_string()))
        }
        DomainError::Forbidden { message } => {
            HttpResponse::Forbidden().json(ErrorResponse::new("forbidden", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Gateway(detail) => {
            log::error!("payment gateway failure: {}", detail);
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "payment_gateway_error",
                "Payment failed",
            ))
        }
        DomainError::Database(detail) => {
            log::error!("database failure: {}", detail);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
        DomainError::Internal { message } => {
            log::error!("internal failure: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert `validator` derive failures into a 400 with field-level details
pub fn validation_failure_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, reason)
            })
        })
        .collect();
    details.sort();

    log::warn!("request validation failed: {:?}", details);

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use ws_core::errors::ValidationError;

    #[test]
    fn unavailable_booking_maps_to_bad_request() {
        let response = domain_error_response(&BookingError::CarNotAvailable.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn wrong_actor_maps_to_forbidden() {
        let response = domain_error_response(&BookingError::NotBookingRenter.into());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_entity_maps_to_not_found() {
        let response = domain_error_response(&DomainError::NotFound {
            resource: "Car".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_internal_error() {
        let response = domain_error_response(&DomainError::Database("connection reset".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_error_maps_to_bad_request() {
        let response = domain_error_response(&ValidationError::InvalidDateRange.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
