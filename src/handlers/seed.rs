//! Seed HTTP handlers.
//!
//! - GET /seed - Create the schema and insert the placeholder data
//! - GET /seed/status - Report which seeded tables exist and their row counts

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        placeholder::PlaceholderData,
        seed::{SeedReport, SeedStatus},
    },
    services::seed_service,
};
use axum::{Json, extract::State};

/// Seed the database.
///
/// # Endpoint
///
/// `GET /seed`
///
/// # Response
///
/// - **Success (200 OK)**: `SeedReport` with per-table insert counts
/// - **Error (500)**: `{ "error": "<message>" }`
///
/// Safe to call repeatedly: rows already present are skipped.
pub async fn seed(State(pool): State<DbPool>) -> Result<Json<SeedReport>, AppError> {
    let data = PlaceholderData::load()?;
    tracing::info!("Seeding database");

    let report = seed_service::seed_database(&pool, &data).await?;

    Ok(Json(report))
}

/// Check whether the database holds the seeded rows.
///
/// # Endpoint
///
/// `GET /seed/status`
///
/// ```json
/// {
///   "seeded": false,
///   "tables": [
///     { "table": "users", "exists": true, "rows": 1, "expected": 1 },
///     { "table": "customers", "exists": false, "rows": null, "expected": 6 }
///   ]
/// }
/// ```
pub async fn seed_status(State(pool): State<DbPool>) -> Result<Json<SeedStatus>, AppError> {
    let data = PlaceholderData::load()?;
    let status = seed_service::seed_status(&pool, &data).await?;

    Ok(Json(status))
}
