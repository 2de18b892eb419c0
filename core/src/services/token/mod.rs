//! JWT token service
//!
//! Issues and verifies the HS256 bearer tokens that authenticate every
//! protected endpoint. Tokens are stateless; there is no refresh-token
//! store and no revocation list.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::{Claims, TokenService};
