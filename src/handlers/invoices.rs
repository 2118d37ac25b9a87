//! Invoice HTTP handlers.
//!
//! This module implements the invoice-related API endpoints:
//! - GET /api/v1/invoices - List all invoices
//! - GET /api/v1/invoices/:id - Get invoice by ID
//! - GET /api/v1/invoices/:id/invoice_items - List an invoice's line items
//! - GET /api/v1/invoices/:id/transactions - List an invoice's payment attempts

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        invoice::{Invoice, InvoiceResponse},
        invoice_item::{InvoiceItem, InvoiceItemResponse},
        transaction::{Transaction, TransactionResponse},
    },
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all invoices, newest first.
pub async fn list_invoices(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<InvoiceResponse>>, AppError> {
    let invoices = sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id, customer_id, merchant_id, status, created_at, updated_at
        FROM invoices
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<InvoiceResponse> = invoices.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific invoice by ID, or 404.
pub async fn get_invoice(
    State(pool): State<DbPool>,
    Path(invoice_id): Path<i64>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let invoice = sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id, customer_id, merchant_id, status, created_at, updated_at
        FROM invoices
        WHERE id = $1
        "#,
    )
    .bind(invoice_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Invoice"))?;

    Ok(Json(invoice.into()))
}

/// List the line items on an invoice, or 404 when the invoice is missing.
pub async fn list_invoice_invoice_items(
    State(pool): State<DbPool>,
    Path(invoice_id): Path<i64>,
) -> Result<Json<Vec<InvoiceItemResponse>>, AppError> {
    invoice_exists(&pool, invoice_id).await?;

    let invoice_items = sqlx::query_as::<_, InvoiceItem>(
        r#"
        SELECT id, invoice_id, item_id, quantity, unit_price_cents, created_at, updated_at
        FROM invoice_items
        WHERE invoice_id = $1
        ORDER BY id
        "#,
    )
    .bind(invoice_id)
    .fetch_all(&pool)
    .await?;

    let responses: Vec<InvoiceItemResponse> = invoice_items.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// List the payment attempts against an invoice, or 404 when the invoice
/// is missing.
pub async fn list_invoice_transactions(
    State(pool): State<DbPool>,
    Path(invoice_id): Path<i64>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    invoice_exists(&pool, invoice_id).await?;

    let transactions = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, invoice_id, credit_card_number, result, created_at, updated_at
        FROM transactions
        WHERE invoice_id = $1
        ORDER BY id
        "#,
    )
    .bind(invoice_id)
    .fetch_all(&pool)
    .await?;

    let responses: Vec<TransactionResponse> = transactions.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// 404 guard shared by the relationship endpoints.
async fn invoice_exists(pool: &DbPool, invoice_id: i64) -> Result<(), AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM invoices WHERE id = $1)")
        .bind(invoice_id)
        .fetch_one(pool)
        .await?;

    if exists {
        Ok(())
    } else {
        Err(AppError::NotFound("Invoice"))
    }
}
