//! Seeding logic, separated from HTTP handlers.

/// Argon2 hashing of seed passwords
pub mod password;
/// Idempotent DDL for the dashboard tables
pub mod schema;
pub mod seed_service;
