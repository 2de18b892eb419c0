//! Business services containing domain logic and use cases.

pub mod auth;
pub mod booking;
pub mod car;
pub mod payment;
pub mod review;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use booking::BookingService;
pub use car::CarService;
pub use payment::{Charge, DummyPaymentProcessor, DummyReceipt, PaymentGateway, PaymentService};
pub use review::ReviewService;
pub use token::{Claims, TokenService, TokenServiceConfig};
pub use verification::VerificationService;
