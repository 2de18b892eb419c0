//! Specific error taxonomies for authentication, token handling, bookings,
//! and input validation. Presentation-layer mapping to HTTP status codes
//! lives in the API crate.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already registered with this email")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Authentication required")]
    MissingToken,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Booking-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// The requested range is not contained in any availability window
    #[error("Car is not available for the selected dates")]
    CarNotAvailable,

    /// The requester did not create the booking
    #[error("Not authorized to cancel this booking")]
    NotBookingRenter,
}

/// Validation errors detected before any persistence call
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid format for {field}")]
    InvalidFormat { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Start date must be before end date")]
    InvalidDateRange,

    #[error("Invalid PAN format")]
    InvalidPanFormat,

    #[error("Invalid amount")]
    InvalidAmount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn booking_error_message_matches_api_contract() {
        assert_eq!(
            BookingError::CarNotAvailable.to_string(),
            "Car is not available for the selected dates"
        );
    }

    #[test]
    fn specific_errors_bridge_into_domain_error() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert!(matches!(err, DomainError::Auth(_)));

        let err: DomainError = ValidationError::InvalidDateRange.into();
        assert!(matches!(err, DomainError::ValidationErr(_)));
    }
}
