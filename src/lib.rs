//! Sales Reporting API - library crate.
//!
//! This crate implements a read-mostly REST API over an e-commerce
//! database: merchants, customers, invoices, invoice items, items, and
//! payment transactions, plus aggregate sales reports.
//!
//! The router lives here (rather than in `main.rs`) so integration tests
//! can mount the full application in-process against a test database.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use db::DbPool;

/// Build the application router.
///
/// # Routes
///
/// - Record endpoints: index + show for every resource
/// - Relationship endpoints following the foreign keys
/// - Report endpoints under `/api/v1/items` (best day, rankings)
/// - `/health` for service monitoring
///
/// The ranking routes (`most_revenue`, `most_items`) are registered as
/// static segments, which axum matches ahead of the `{id}` capture.
pub fn app(pool: DbPool) -> Router {
    Router::new()
        // Public monitoring route
        .route("/health", get(handlers::health::health_check))
        // Merchant routes
        .route("/api/v1/merchants", get(handlers::merchants::list_merchants))
        .route("/api/v1/merchants/{id}", get(handlers::merchants::get_merchant))
        .route(
            "/api/v1/merchants/{id}/items",
            get(handlers::merchants::list_merchant_items),
        )
        // Customer routes
        .route("/api/v1/customers", get(handlers::customers::list_customers))
        .route("/api/v1/customers/{id}", get(handlers::customers::get_customer))
        // Item routes
        .route("/api/v1/items", get(handlers::items::list_items))
        .route("/api/v1/items/most_revenue", get(handlers::items::most_revenue))
        .route("/api/v1/items/most_items", get(handlers::items::most_items))
        .route("/api/v1/items/{id}", get(handlers::items::get_item))
        .route(
            "/api/v1/items/{id}/invoice_items",
            get(handlers::items::list_item_invoice_items),
        )
        .route(
            "/api/v1/items/{id}/merchant",
            get(handlers::items::get_item_merchant),
        )
        .route(
            "/api/v1/items/{id}/best_day",
            get(handlers::items::get_item_best_day),
        )
        // Invoice routes
        .route("/api/v1/invoices", get(handlers::invoices::list_invoices))
        .route("/api/v1/invoices/{id}", get(handlers::invoices::get_invoice))
        .route(
            "/api/v1/invoices/{id}/invoice_items",
            get(handlers::invoices::list_invoice_invoice_items),
        )
        .route(
            "/api/v1/invoices/{id}/transactions",
            get(handlers::invoices::list_invoice_transactions),
        )
        // Invoice item routes
        .route(
            "/api/v1/invoice_items",
            get(handlers::invoice_items::list_invoice_items),
        )
        .route(
            "/api/v1/invoice_items/{id}",
            get(handlers::invoice_items::get_invoice_item),
        )
        // Transaction routes
        .route(
            "/api/v1/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        // The API is public and read-only, so CORS is wide open
        .layer(CorsLayer::permissive())
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}
