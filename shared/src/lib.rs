//! Shared utilities and common types for the WheelShare server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (server, database, auth)
//! - API response wrappers
//! - Validation helpers (email, phone, PAN format)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, DatabaseConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
