//! Monthly revenue seed record.

use serde::Deserialize;

/// Longest month label the `revenue.month` column accepts (`VARCHAR(4)`).
pub const MAX_MONTH_LEN: usize = 4;

/// One month of revenue, e.g. `{ "month": "Jan", "revenue": 2000 }`.
///
/// Maps to the `revenue` table, keyed by the unique `month` label.
#[derive(Debug, Clone, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
