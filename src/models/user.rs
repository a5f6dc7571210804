//! Dashboard user seed record.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as it appears in the placeholder dataset.
///
/// # Database Table
///
/// Maps to the `users` table. The clear-text `password` only lives in the
/// fixture; the row stores its Argon2 hash.
#[derive(Clone, Deserialize)]
pub struct SeedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

// Keep clear-text passwords out of logs.
impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of seeding one user, returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct SeededUser {
    pub id: Uuid,
    pub email: String,

    /// `false` when a row with this id already existed
    pub inserted: bool,
}
