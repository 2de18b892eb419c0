//! Authentication service module
//!
//! Registration, login, and user administration:
//! - field validation before any persistence call
//! - duplicate-email detection
//! - bcrypt password hashing
//! - access-token issuance on login

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::{AuthService, LoginOutcome};
