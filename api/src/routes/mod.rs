//! Route handlers grouped by resource
//!
//! Handlers are generic over the repository and gateway traits; `main`
//! instantiates them with the MySQL and Stripe implementations, the
//! integration tests with in-memory mocks.

pub mod bookings;
pub mod cars;
pub mod payments;
pub mod reviews;
pub mod users;
pub mod verify;

use std::sync::Arc;

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::{
    AuthService, BookingService, CarService, DummyPaymentProcessor, PaymentGateway,
    PaymentService, ReviewService, VerificationService,
};

/// Application state holding the shared service graph
pub struct AppState<U, C, B, R, G>
where
    U: UserRepository,
    C: CarRepository,
    B: BookingRepository,
    R: ReviewRepository,
    G: PaymentGateway,
{
    pub auth_service: Arc<AuthService<U>>,
    pub car_service: Arc<CarService<C>>,
    pub booking_service: Arc<BookingService<C, B>>,
    pub review_service: Arc<ReviewService<R>>,
    pub payment_service: Arc<PaymentService<G>>,
    pub verification_service: Arc<VerificationService<U>>,
    pub dummy_payments: DummyPaymentProcessor,
}
