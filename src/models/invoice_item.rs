//! Invoice item data model and API response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents an invoice line item from the database.
///
/// # Database Table
///
/// Maps to the `invoice_items` table. A line item links one item to one
/// invoice with the quantity sold and the unit price at time of sale.
/// The price is copied from the item so later price changes do not
/// rewrite past invoices.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceItem {
    /// Unique identifier for this line item
    pub id: i64,

    /// Foreign key to the invoice
    pub invoice_id: i64,

    /// Foreign key to the item sold
    pub item_id: i64,

    /// Units sold on this line
    pub quantity: i64,

    /// Sale price per unit in cents
    pub unit_price_cents: i64,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Response body for invoice item endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 12,
///   "invoice_id": 3,
///   "item_id": 7,
///   "quantity": 4,
///   "unit_price_cents": 345
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct InvoiceItemResponse {
    pub id: i64,
    pub invoice_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl From<InvoiceItem> for InvoiceItemResponse {
    fn from(invoice_item: InvoiceItem) -> Self {
        Self {
            id: invoice_item.id,
            invoice_id: invoice_item.invoice_id,
            item_id: invoice_item.item_id,
            quantity: invoice_item.quantity,
            unit_price_cents: invoice_item.unit_price_cents,
        }
    }
}
