//! Item data model, API response type, and ranked report rows.
//!
//! This module defines:
//! - `Item`: Database entity representing a product
//! - `ItemResponse`: Response body returned to clients
//! - `ItemRevenue` / `ItemSales`: rows produced by the ranking reports,
//!   carrying the item fields plus the aggregate each report sorts by

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents an item record from the database.
///
/// # Database Table
///
/// Maps to the `items` table. Each item belongs to one merchant.
///
/// # Price Storage
///
/// Prices are stored as `i64` cents to avoid floating-point precision
/// issues: $3.45 is stored as 345.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Item {
    /// Unique identifier for this item
    pub id: i64,

    /// Product name
    pub name: String,

    /// Free-text product description
    pub description: String,

    /// Current list price in cents (not dollars)
    pub unit_price_cents: i64,

    /// Foreign key to the merchant selling this item
    pub merchant_id: i64,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Response body for item endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 7,
///   "name": "Bacon",
///   "description": "Thick cut",
///   "unit_price_cents": 345,
///   "merchant_id": 2
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub merchant_id: i64,
}

/// Convert a database Item into its API shape, dropping timestamps.
impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            unit_price_cents: item.unit_price_cents,
            merchant_id: item.merchant_id,
        }
    }
}

/// Row returned by the revenue ranking report.
///
/// `revenue_cents` is `SUM(quantity * unit_price_cents)` over line items
/// on paid invoices, cast back to BIGINT in SQL.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ItemRevenue {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub merchant_id: i64,

    /// Total revenue this item generated, in cents
    pub revenue_cents: i64,
}

/// Row returned by the quantity-sold ranking report.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ItemSales {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub merchant_id: i64,

    /// Total units of this item sold
    pub items_sold: i64,
}

/// Response body for `GET /api/v1/items/:id/best_day`.
///
/// # JSON Example
///
/// ```json
/// {
///   "best_day": "2001-03-27T14:53:59Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct BestDayResponse {
    /// Invoice timestamp with the highest quantity of this item sold
    pub best_day: DateTime<Utc>,
}
