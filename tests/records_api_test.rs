//! Request-level tests for the record and relationship endpoints.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::*;

#[sqlx::test]
async fn lists_merchants_newest_first(pool: PgPool) {
    let first = create_merchant(&pool, "Lady Jane").await;
    let second = create_merchant(&pool, "Billy Bobs Bacon").await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/api/v1/merchants").await;

    assert_eq!(status, StatusCode::OK);
    let merchants = body.as_array().unwrap();
    assert_eq!(merchants.len(), 2);
    assert_eq!(merchants[0]["id"].as_i64(), Some(second));
    assert_eq!(merchants[1]["id"].as_i64(), Some(first));
}

#[sqlx::test]
async fn gets_one_merchant_by_id(pool: PgPool) {
    let merchant = create_merchant(&pool, "Lady Jane").await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, &format!("/api/v1/merchants/{merchant}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64(), Some(merchant));
    assert_eq!(body["name"], "Lady Jane");
    assert!(body.get("created_at").is_none());
}

#[sqlx::test]
async fn missing_merchant_returns_404(pool: PgPool) {
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/api/v1/merchants/424242").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "not_found");
}

#[sqlx::test]
async fn lists_a_merchants_items(pool: PgPool) {
    let merchant1 = create_merchant(&pool, "Lady Jane").await;
    let merchant2 = create_merchant(&pool, "Billy Bobs Bacon").await;
    let scarf = create_item(&pool, merchant1, "Scarf", 1200).await;
    let hat = create_item(&pool, merchant1, "Hat", 900).await;
    create_item(&pool, merchant2, "Bacon", 345).await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, &format!("/api/v1/merchants/{merchant1}/items")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![scarf, hat]);

    let (status, _) = get_json(&app, "/api/v1/merchants/424242/items").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn lists_and_gets_customers(pool: PgPool) {
    let customer = create_customer(&pool, "Billy", "Bob").await;
    create_customer(&pool, "Lady", "Jane").await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/api/v1/customers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get_json(&app, &format!("/api/v1/customers/{customer}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Billy");
    assert_eq!(body["last_name"], "Bob");

    let (status, body) = get_json(&app, "/api/v1/customers/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "not_found");
}

#[sqlx::test]
async fn lists_and_gets_invoices(pool: PgPool) {
    let merchant = create_merchant(&pool, "Lady Jane").await;
    let customer = create_customer(&pool, "Billy", "Bob").await;
    let invoice = create_invoice(&pool, merchant, customer).await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/api/v1/invoices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get_json(&app, &format!("/api/v1/invoices/{invoice}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64(), Some(invoice));
    assert_eq!(body["merchant_id"].as_i64(), Some(merchant));
    assert_eq!(body["customer_id"].as_i64(), Some(customer));
    assert_eq!(body["status"], "shipped");

    let (status, body) = get_json(&app, "/api/v1/invoices/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "not_found");
}

#[sqlx::test]
async fn lists_an_invoices_line_items_and_transactions(pool: PgPool) {
    let merchant = create_merchant(&pool, "Lady Jane").await;
    let customer = create_customer(&pool, "Billy", "Bob").await;
    let invoice = create_invoice(&pool, merchant, customer).await;
    let other_invoice = create_invoice(&pool, merchant, customer).await;
    let item = create_item(&pool, merchant, "Scarf", 1200).await;

    let line = create_invoice_item(&pool, invoice, item, 2, 1200).await;
    create_invoice_item(&pool, other_invoice, item, 9, 1200).await;
    let attempt = create_transaction(&pool, invoice, "failed").await;
    create_transaction(&pool, other_invoice, "success").await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, &format!("/api/v1/invoices/{invoice}/invoice_items")).await;
    assert_eq!(status, StatusCode::OK);
    let lines = body.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"].as_i64(), Some(line));
    assert_eq!(lines[0]["quantity"].as_i64(), Some(2));

    let (status, body) = get_json(&app, &format!("/api/v1/invoices/{invoice}/transactions")).await;
    assert_eq!(status, StatusCode::OK);
    let attempts = body.as_array().unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0]["id"].as_i64(), Some(attempt));
    assert_eq!(attempts[0]["result"], "failed");

    let (status, _) = get_json(&app, "/api/v1/invoices/424242/invoice_items").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get_json(&app, "/api/v1/invoices/424242/transactions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn lists_and_gets_invoice_items(pool: PgPool) {
    let merchant = create_merchant(&pool, "Lady Jane").await;
    let customer = create_customer(&pool, "Billy", "Bob").await;
    let invoice = create_invoice(&pool, merchant, customer).await;
    let item = create_item(&pool, merchant, "Scarf", 1200).await;
    let line = create_invoice_item(&pool, invoice, item, 4, 1150).await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/api/v1/invoice_items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get_json(&app, &format!("/api/v1/invoice_items/{line}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice_id"].as_i64(), Some(invoice));
    assert_eq!(body["item_id"].as_i64(), Some(item));
    assert_eq!(body["quantity"].as_i64(), Some(4));
    assert_eq!(body["unit_price_cents"].as_i64(), Some(1150));

    let (status, body) = get_json(&app, "/api/v1/invoice_items/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "not_found");
}

#[sqlx::test]
async fn lists_and_gets_transactions(pool: PgPool) {
    let merchant = create_merchant(&pool, "Lady Jane").await;
    let customer = create_customer(&pool, "Billy", "Bob").await;
    let invoice = create_invoice(&pool, merchant, customer).await;
    let success = create_transaction(&pool, invoice, "success").await;
    create_transaction(&pool, invoice, "failed").await;
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/api/v1/transactions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get_json(&app, &format!("/api/v1/transactions/{success}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice_id"].as_i64(), Some(invoice));
    assert_eq!(body["result"], "success");
    assert!(body["credit_card_number"].is_i64());

    let (status, body) = get_json(&app, "/api/v1/transactions/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "not_found");
}

#[sqlx::test]
async fn health_check_reports_healthy(pool: PgPool) {
    let app = test_app(pool);

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}
