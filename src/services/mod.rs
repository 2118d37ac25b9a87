//! Business logic services.
//!
//! Services hold the SQL that goes beyond single-record lookups, kept
//! out of the HTTP handlers so the handlers stay thin.

pub mod reports;
