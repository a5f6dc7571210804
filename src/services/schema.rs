//! Dashboard schema creation.
//!
//! Every statement is idempotent, so the seed route can run against an empty
//! database or one that was already seeded.

use crate::{db::DbPool, error::AppError};

/// DDL statements, in execution order.
pub const SCHEMA_STATEMENTS: [&str; 5] = [
    r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        image_url VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL REFERENCES customers (id),
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
    "#,
];

/// Create the extension and the four tables inside one transaction.
///
/// # Errors
///
/// Returns `Database` if any statement fails; nothing is committed then.
#[tracing::instrument(skip_all)]
pub async fn create_schema(pool: &DbPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::info!("Schema ready");

    Ok(())
}
