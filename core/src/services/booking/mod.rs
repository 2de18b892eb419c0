//! Booking service
//!
//! Creation with the availability containment check, cancellation restricted
//! to the booking's renter, and ledger listing. Accepting a booking does not
//! subtract from the car's availability windows; see the service docs for
//! the consequences.

mod service;

#[cfg(test)]
mod tests;

pub use service::BookingService;
