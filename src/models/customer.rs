//! Customer seed record.

use serde::Deserialize;
use uuid::Uuid;

/// A customer from the placeholder dataset.
///
/// Maps to the `customers` table. `image_url` is a path relative to the
/// dashboard's public assets, e.g. `/customers/evil-rabbit.png`.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}
