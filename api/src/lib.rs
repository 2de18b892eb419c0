//! HTTP API layer for the WheelShare backend
//!
//! Exposes the actix-web application factory, request/response DTOs,
//! authentication middleware, and the domain-error-to-HTTP mapping.
//! Binary entry point lives in `main.rs`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
