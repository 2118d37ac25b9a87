//! Shared helpers for the request-level tests.
//!
//! Each test gets a fresh database from `#[sqlx::test]` (migrations are
//! applied automatically), mounts the full router in-process, and drives
//! it with `tower::ServiceExt::oneshot`. The seed functions below play
//! the role of factories.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use sales_reporting_api::app;

/// Build the application router against the test pool.
pub fn test_app(pool: PgPool) -> Router {
    app(pool)
}

/// Issue a GET request and return the status plus the parsed JSON body.
///
/// Non-JSON bodies (axum's built-in rejections) come back as `Value::Null`.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Assert the standard error body shape and return nothing.
pub fn assert_error_code(body: &Value, expected: &str) {
    assert_eq!(body["error"]["code"], expected, "body was: {body}");
}

pub async fn create_merchant(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO merchants (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_customer(pool: &PgPool, first_name: &str, last_name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO customers (first_name, last_name) VALUES ($1, $2) RETURNING id")
        .bind(first_name)
        .bind(last_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_item(pool: &PgPool, merchant_id: i64, name: &str, unit_price_cents: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO items (name, description, unit_price_cents, merchant_id)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(format!("{name} description"))
    .bind(unit_price_cents)
    .bind(merchant_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_invoice(pool: &PgPool, merchant_id: i64, customer_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO invoices (merchant_id, customer_id, status)
         VALUES ($1, $2, 'shipped') RETURNING id",
    )
    .bind(merchant_id)
    .bind(customer_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Invoice with a pinned creation timestamp, for the best-day scenarios.
pub async fn create_invoice_at(
    pool: &PgPool,
    merchant_id: i64,
    customer_id: i64,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO invoices (merchant_id, customer_id, status, created_at)
         VALUES ($1, $2, 'shipped', $3) RETURNING id",
    )
    .bind(merchant_id)
    .bind(customer_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_invoice_item(
    pool: &PgPool,
    invoice_id: i64,
    item_id: i64,
    quantity: i64,
    unit_price_cents: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO invoice_items (invoice_id, item_id, quantity, unit_price_cents)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(invoice_id)
    .bind(item_id)
    .bind(quantity)
    .bind(unit_price_cents)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_transaction(pool: &PgPool, invoice_id: i64, result: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO transactions (invoice_id, credit_card_number, result)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(invoice_id)
    .bind(4654405418_i64)
    .bind(result)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Parse a fixed timestamp literal used in fixtures.
pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}
