//! Data models for the seeded tables and the seed endpoints.

pub mod customer;
pub mod invoice;
/// Compiled-in dataset and its validation
pub mod placeholder;
pub mod revenue;
/// Seed report and status responses
pub mod seed;
pub mod user;
