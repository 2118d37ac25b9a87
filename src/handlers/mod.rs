//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (URL params, query string)
//! 2. Runs the database query
//! 3. Returns a JSON response

/// Customer endpoints
pub mod customers;
/// Service monitoring endpoint
pub mod health;
/// Invoice line item endpoints
pub mod invoice_items;
/// Invoice endpoints
pub mod invoices;
/// Item endpoints, including the sales reports
pub mod items;
/// Merchant endpoints
pub mod merchants;
/// Transaction endpoints
pub mod transactions;
