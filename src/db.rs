//! Database connection pool management.
//!
//! Seeding only ever talks to one PostgreSQL database, through one pool.

use std::str::FromStr;

use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

use crate::config::Config;

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// When `POSTGRES_REQUIRE_SSL` is set (the default), the connection string's
/// own `sslmode` is overridden with `require`, matching hosted Postgres
/// providers that refuse plaintext connections.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(config: &Config) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.postgres_url)?;
    if config.postgres_require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }

    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
}
