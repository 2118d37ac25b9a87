//! Customer data model and API response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a customer record from the database.
///
/// Maps to the `customers` table. Customers are the billing target of
/// invoices.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for customer endpoints.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
        }
    }
}
