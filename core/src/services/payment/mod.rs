//! Payment service module
//!
//! The real charge path goes through the [`PaymentGateway`] trait, an opaque
//! external collaborator implemented in the infrastructure crate. The dummy
//! path simulates a successful charge without leaving the process.

mod dummy;
mod service;

pub use dummy::{DummyPaymentProcessor, DummyReceipt};
pub use service::{Charge, PaymentGateway, PaymentService};
