//! Merchant data model and API response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a merchant record from the database.
///
/// # Database Table
///
/// Maps to the `merchants` table. A merchant owns items and issues
/// invoices; both foreign keys cascade on delete.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Merchant {
    /// Unique identifier for this merchant
    pub id: i64,

    /// Display name of the merchant
    pub name: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Response body for merchant endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Lady Jane"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct MerchantResponse {
    pub id: i64,
    pub name: String,
}

/// Convert a database Merchant into its API shape, dropping timestamps.
impl From<Merchant> for MerchantResponse {
    fn from(merchant: Merchant) -> Self {
        Self {
            id: merchant.id,
            name: merchant.name,
        }
    }
}
