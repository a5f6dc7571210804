//! Dashboard Seed Service - Main Application Entry Point
//!
//! A small HTTP service that creates the dashboard schema (users, customers,
//! invoices, revenue) and fills it with a fixed placeholder dataset, hashing
//! user passwords before they are stored.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Passwords**: Argon2id
//! - **Format**: JSON responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Build HTTP router
//! 4. Start server on configured port
//!
//! Seeding itself happens on `GET /seed`, not at startup.

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(
        require_ssl = config.postgres_require_ssl,
        max_connections = config.database_max_connections,
        "Configuration loaded"
    );

    let pool = db::create_pool(&config).await?;
    tracing::info!("Database pool created");

    let app = routes::build_router(pool);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
