//! Tests for the review service

#[cfg(test)]
mod service_tests;
