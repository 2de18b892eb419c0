//! Configuration modules for the WheelShare server.
//!
//! Each configuration struct provides sensible defaults and a `from_env`
//! constructor reading the corresponding environment variables.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
