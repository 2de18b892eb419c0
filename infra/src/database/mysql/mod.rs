//! MySQL repository implementations.
//!
//! One repository per aggregate; row mapping goes through `try_get` with
//! errors folded into `DomainError::Database`. Availability windows are
//! stored as a JSON column on `cars` and deserialized back in order.

mod booking_repository_impl;
mod car_repository_impl;
mod review_repository_impl;
mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use car_repository_impl::MySqlCarRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use user_repository_impl::MySqlUserRepository;
