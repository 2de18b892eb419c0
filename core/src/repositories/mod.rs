//! Repository interfaces for data persistence.
//!
//! Traits define the contract between the domain and whatever store backs
//! it; SQLx implementations live in the infrastructure crate, and each
//! repository ships an in-memory mock for tests and local wiring.

pub mod booking;
pub mod car;
pub mod review;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use car::{CarRepository, MockCarRepository};
pub use review::{MockReviewRepository, ReviewRepository};
pub use user::{MockUserRepository, UserRepository};
