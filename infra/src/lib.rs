//! # Infrastructure Layer
//!
//! Concrete implementations behind the core repository and gateway traits:
//! - **Database**: MySQL repositories using SQLx
//! - **Payment**: reqwest client for the external charge API

pub mod database;
pub mod payment;

use ws_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(message) => DomainError::Database(message),
            InfrastructureError::Gateway(message) => DomainError::Gateway(message),
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
