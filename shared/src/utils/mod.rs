//! Utility modules shared across server crates.

pub mod validation;
