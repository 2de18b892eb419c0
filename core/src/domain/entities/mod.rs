//! Domain entities representing core business objects.

pub mod booking;
pub mod car;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use booking::Booking;
pub use car::{Car, MAX_CAR_YEAR_AHEAD, MIN_CAR_YEAR};
pub use review::{Review, MAX_RATING, MIN_RATING};
pub use user::{User, UserRole};
