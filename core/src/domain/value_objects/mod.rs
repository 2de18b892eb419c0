//! Value objects for the WheelShare domain.

pub mod availability;

pub use availability::{is_bookable, DateRange};
