//! Payment gateway integrations.

mod stripe;

pub use stripe::{StripeConfig, StripeGateway};
