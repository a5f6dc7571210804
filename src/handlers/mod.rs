//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Extracts the shared database pool
//! 2. Calls into the seed services
//! 3. Returns a JSON response, or an `AppError` rendered as HTTP 500
/// Database connectivity probe
pub mod health;
/// Seed and seed status endpoints
pub mod seed;
