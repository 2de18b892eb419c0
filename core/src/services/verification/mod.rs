//! Identity verification service
//!
//! PAN-based verification: a format check against the 10-character PAN
//! pattern, then a field-level update of the user's verified flag.

mod service;

pub use service::VerificationService;
