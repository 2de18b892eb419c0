//! Review service
//!
//! Attaches renter ratings to cars. Ratings are bounded to [1, 5] before
//! persistence; there is no aggregate computation and no check that the
//! renter actually booked the car.

mod service;

#[cfg(test)]
mod tests;

pub use service::ReviewService;
