//! Seed service - creates the dashboard schema and writes the placeholder data.
//!
//! # Order
//!
//! Tables are seeded one after another (users, customers, invoices, revenue)
//! so invoices always find their customers. Rows of the same table are
//! independent and dispatched concurrently over the pool; the first failing
//! insert aborts the run.
//!
//! # Idempotency
//!
//! Every insert carries an `ON CONFLICT ... DO NOTHING` clause, so running the
//! seed twice leaves the data unchanged and reports zero inserted rows.

use futures::future::try_join_all;
use sqlx::postgres::PgQueryResult;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        customer::Customer,
        invoice::Invoice,
        placeholder::PlaceholderData,
        revenue::Revenue,
        seed::{SEED_SUCCESS_MESSAGE, SeedReport, SeedStatus, SeedTable, TableReport, TableStatus},
        user::{SeedUser, SeededUser},
    },
    services::{password, schema},
};

/// Create the schema and insert the placeholder data.
///
/// # Errors
///
/// - `Database`: schema creation or an insert failed
/// - `PasswordHash` / `Task`: a user password could not be hashed
#[tracing::instrument(skip_all)]
pub async fn seed_database(pool: &DbPool, data: &PlaceholderData) -> Result<SeedReport, AppError> {
    schema::create_schema(pool).await?;

    let users = seed_users(pool, &data.users).await?;
    let customers = seed_customers(pool, &data.customers).await?;
    let invoices = seed_invoices(pool, &data.invoices).await?;
    let revenue = seed_revenue(pool, &data.revenue).await?;

    Ok(SeedReport {
        message: SEED_SUCCESS_MESSAGE.to_string(),
        users,
        customers,
        invoices,
        revenue,
    })
}

async fn seed_users(pool: &DbPool, users: &[SeedUser]) -> Result<Vec<SeededUser>, AppError> {
    let seeded = try_join_all(users.iter().map(|user| async move {
        let hashed_password = password::hash_password(user.password.clone()).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(hashed_password)
        .execute(pool)
        .await?;

        Ok::<_, AppError>(SeededUser {
            id: user.id,
            email: user.email.clone(),
            inserted: result.rows_affected() > 0,
        })
    }))
    .await?;

    let inserted = seeded.iter().filter(|u| u.inserted).count();
    tracing::info!(table = "users", offered = users.len(), inserted, "Table seeded");

    Ok(seeded)
}

async fn seed_customers(pool: &DbPool, customers: &[Customer]) -> Result<TableReport, AppError> {
    let results = try_join_all(customers.iter().map(|customer| {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(pool)
    }))
    .await?;

    Ok(table_report(SeedTable::Customers, customers.len(), &results))
}

async fn seed_invoices(pool: &DbPool, invoices: &[Invoice]) -> Result<TableReport, AppError> {
    let results = try_join_all(invoices.iter().map(|invoice| {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(invoice.seed_id())
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(pool)
    }))
    .await?;

    Ok(table_report(SeedTable::Invoices, invoices.len(), &results))
}

async fn seed_revenue(pool: &DbPool, revenue: &[Revenue]) -> Result<TableReport, AppError> {
    let results = try_join_all(revenue.iter().map(|rev| {
        sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(&rev.month)
        .bind(rev.revenue)
        .execute(pool)
    }))
    .await?;

    Ok(table_report(SeedTable::Revenue, revenue.len(), &results))
}

fn table_report(table: SeedTable, offered: usize, results: &[PgQueryResult]) -> TableReport {
    let inserted: u64 = results.iter().map(PgQueryResult::rows_affected).sum();
    tracing::info!(table = table.name(), offered, inserted, "Table seeded");

    TableReport { offered, inserted }
}

/// Report which seeded tables exist and how many rows they hold.
///
/// Missing tables are reported, not treated as errors, so this works before
/// the first seed run.
#[tracing::instrument(skip_all)]
pub async fn seed_status(pool: &DbPool, data: &PlaceholderData) -> Result<SeedStatus, AppError> {
    let mut tables = Vec::with_capacity(SeedTable::ALL.len());

    for table in SeedTable::ALL {
        let exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
            .bind(qualified_name(table))
            .fetch_one(pool)
            .await?;

        let rows = if exists {
            let sql = count_sql(table);
            Some(sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await?)
        } else {
            None
        };

        tables.push(TableStatus {
            table,
            exists,
            rows,
            expected: data.row_count(table),
        });
    }

    Ok(SeedStatus::from_tables(tables))
}

/// Schema-qualified name, so lookups never depend on `search_path`.
fn qualified_name(table: SeedTable) -> String {
    format!("public.{}", table.name())
}

// Table names come from SeedTable, never from input.
fn count_sql(table: SeedTable) -> String {
    format!("SELECT COUNT(*) FROM {}", qualified_name(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[test]
    fn row_counts_use_the_public_schema() {
        for table in SeedTable::ALL {
            assert_eq!(
                count_sql(table),
                format!("SELECT COUNT(*) FROM public.{}", table.name())
            );
        }
    }

    fn rows(status: &SeedStatus, table: SeedTable) -> Option<i64> {
        status
            .tables
            .iter()
            .find(|t| t.table == table)
            .and_then(|t| t.rows)
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires Postgres (set DATABASE_URL)"]
    async fn seeds_once_and_reseeds_as_noop(pool: PgPool) {
        let data = PlaceholderData::load().unwrap();

        let before = seed_status(&pool, &data).await.unwrap();
        assert!(!before.seeded);
        assert!(before.tables.iter().all(|t| !t.exists && t.rows.is_none()));

        let first = seed_database(&pool, &data).await.unwrap();
        assert_eq!(first.message, SEED_SUCCESS_MESSAGE);
        assert_eq!(first.users.len(), 1);
        assert!(first.users[0].inserted);
        assert_eq!(first.customers, TableReport { offered: 6, inserted: 6 });
        assert_eq!(first.invoices, TableReport { offered: 13, inserted: 13 });
        assert_eq!(first.revenue, TableReport { offered: 12, inserted: 12 });

        let second = seed_database(&pool, &data).await.unwrap();
        assert!(!second.users[0].inserted);
        assert_eq!(second.customers.inserted, 0);
        assert_eq!(second.invoices.inserted, 0);
        assert_eq!(second.revenue.inserted, 0);

        let after = seed_status(&pool, &data).await.unwrap();
        assert!(after.seeded);
        assert_eq!(rows(&after, SeedTable::Users), Some(1));
        assert_eq!(rows(&after, SeedTable::Customers), Some(6));
        assert_eq!(rows(&after, SeedTable::Invoices), Some(13));
        assert_eq!(rows(&after, SeedTable::Revenue), Some(12));
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires Postgres (set DATABASE_URL)"]
    async fn stores_argon2_hashes_and_valid_customer_links(pool: PgPool) {
        let data = PlaceholderData::load().unwrap();
        seed_database(&pool, &data).await.unwrap();

        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
            .bind("user@nextmail.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(stored.starts_with("$argon2id$v="));
        assert_ne!(stored, data.users[0].password);

        let orphans: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invoices i LEFT JOIN customers c ON c.id = i.customer_id WHERE c.id IS NULL",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(orphans, 0);

        let bad_invoice = sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, 1, 'paid', CURRENT_DATE)",
        )
        .bind(uuid::Uuid::nil())
        .execute(&pool)
        .await;
        assert!(bad_invoice.is_err());
    }
}
