//! Data models representing database entities.
//!
//! Each module pairs a `sqlx::FromRow` entity with the response struct
//! the API serializes. Responses expose domain fields only; row
//! timestamps stay internal.

/// Buyer model
pub mod customer;
/// Invoice model
pub mod invoice;
/// Invoice line item model
pub mod invoice_item;
/// Product model and ranked report rows
pub mod item;
/// Seller model
pub mod merchant;
/// Payment attempt model
pub mod transaction;
