//! Car listing service
//!
//! Listing creation with validation of the model year, price, and
//! availability windows, plus search by location and requested date range.

mod service;

#[cfg(test)]
mod tests;

pub use service::CarService;
