//! Response bodies for the seed endpoints.

use serde::Serialize;

use super::user::SeededUser;

/// Message returned after a successful seed run.
pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

/// The four seeded tables, in seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedTable {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl SeedTable {
    pub const ALL: [SeedTable; 4] = [
        SeedTable::Users,
        SeedTable::Customers,
        SeedTable::Invoices,
        SeedTable::Revenue,
    ];

    /// Table name in the `public` schema.
    pub fn name(&self) -> &'static str {
        match self {
            SeedTable::Users => "users",
            SeedTable::Customers => "customers",
            SeedTable::Invoices => "invoices",
            SeedTable::Revenue => "revenue",
        }
    }
}

/// Insert counts for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// Rows offered by the placeholder dataset
    pub offered: usize,

    /// Rows actually written (conflicting rows are skipped)
    pub inserted: u64,
}

/// Response of `GET /seed`.
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Database seeded successfully",
///   "users": [
///     { "id": "410544b2-4001-4271-9855-fec4b6a6442a", "email": "user@nextmail.com", "inserted": true }
///   ],
///   "customers": { "offered": 6, "inserted": 6 },
///   "invoices": { "offered": 13, "inserted": 13 },
///   "revenue": { "offered": 12, "inserted": 12 }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub message: String,
    pub users: Vec<SeededUser>,
    pub customers: TableReport,
    pub invoices: TableReport,
    pub revenue: TableReport,
}

/// State of one seeded table.
#[derive(Debug, Clone, Serialize)]
pub struct TableStatus {
    pub table: SeedTable,
    pub exists: bool,

    /// `None` when the table does not exist
    pub rows: Option<i64>,

    /// Rows the placeholder dataset contributes
    pub expected: usize,
}

impl TableStatus {
    pub fn is_seeded(&self) -> bool {
        self.exists && self.rows.unwrap_or(0) >= self.expected as i64
    }
}

/// Response of `GET /seed/status`.
#[derive(Debug, Serialize)]
pub struct SeedStatus {
    pub seeded: bool,
    pub tables: Vec<TableStatus>,
}

impl SeedStatus {
    pub fn from_tables(tables: Vec<TableStatus>) -> Self {
        let seeded = tables.iter().all(TableStatus::is_seeded);
        Self { seeded, tables }
    }
}
