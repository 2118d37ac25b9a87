//! Invoice data model and API response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents an invoice record from the database.
///
/// # Database Table
///
/// Maps to the `invoices` table. An invoice links one merchant and one
/// customer; its line items and payment attempts hang off it.
///
/// # Paid Invoices
///
/// An invoice counts as paid when at least one of its transactions has
/// `result = 'success'`. The reporting queries only consider paid
/// invoices.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Invoice {
    /// Unique identifier for this invoice
    pub id: i64,

    /// Foreign key to the billed customer
    pub customer_id: i64,

    /// Foreign key to the issuing merchant
    pub merchant_id: i64,

    /// Fulfillment status (e.g. "shipped")
    pub status: String,

    /// Timestamp when the invoice was created
    ///
    /// This is the timestamp the best-day report groups and ranks by.
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Response body for invoice endpoints.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: i64,
    pub customer_id: i64,
    pub merchant_id: i64,
    pub status: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            customer_id: invoice.customer_id,
            merchant_id: invoice.merchant_id,
            status: invoice.status,
        }
    }
}
