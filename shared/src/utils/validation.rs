//! Common validation helpers
//!
//! Format checks shared by the API boundary and the domain services.
//! The patterns mirror what the registration and verification endpoints
//! accept: a basic email shape, a mobile phone number with optional
//! country prefix, and the 10-character PAN format.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone regex is valid"));

/// PAN card format: five uppercase letters, four digits, one uppercase letter
static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN regex is valid"));

/// Check if a string is a plausible email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check if a string is a plausible mobile phone number
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Check if a string matches the PAN card format
pub fn is_valid_pan(value: &str) -> bool {
    value.len() == 10 && PAN_REGEX.is_match(value)
}

/// Check if a string is non-empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
