//! Tests for the car listing service
