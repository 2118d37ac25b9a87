//! Transaction data model and API response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a payment attempt against an invoice.
///
/// # Database Table
///
/// Maps to the `transactions` table. The card number arrives already
/// truncated, so it fits a plain BIGINT and is nullable for imports that
/// lack it.
///
/// # Result Values
///
/// - `"success"`: the payment cleared; the invoice counts as paid
/// - `"failed"`: the payment was declined
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: i64,

    /// Foreign key to the invoice being paid
    pub invoice_id: i64,

    /// Truncated credit card number used for the attempt
    pub credit_card_number: Option<i64>,

    /// Outcome of the attempt ("success" or "failed")
    pub result: String,

    /// Timestamp when the attempt was recorded
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Response body for transaction endpoints.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub invoice_id: i64,
    pub credit_card_number: Option<i64>,
    pub result: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            invoice_id: transaction.invoice_id,
            credit_card_number: transaction.credit_card_number,
            result: transaction.result,
        }
    }
}
