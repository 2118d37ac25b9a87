//! Invoice line item HTTP handlers.
//!
//! - GET /api/v1/invoice_items - List all line items
//! - GET /api/v1/invoice_items/:id - Get line item by ID

use crate::{
    db::DbPool,
    error::AppError,
    models::invoice_item::{InvoiceItem, InvoiceItemResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all invoice line items, newest first.
pub async fn list_invoice_items(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<InvoiceItemResponse>>, AppError> {
    let invoice_items = sqlx::query_as::<_, InvoiceItem>(
        r#"
        SELECT id, invoice_id, item_id, quantity, unit_price_cents, created_at, updated_at
        FROM invoice_items
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<InvoiceItemResponse> = invoice_items.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific invoice line item by ID, or 404.
pub async fn get_invoice_item(
    State(pool): State<DbPool>,
    Path(invoice_item_id): Path<i64>,
) -> Result<Json<InvoiceItemResponse>, AppError> {
    let invoice_item = sqlx::query_as::<_, InvoiceItem>(
        r#"
        SELECT id, invoice_id, item_id, quantity, unit_price_cents, created_at, updated_at
        FROM invoice_items
        WHERE id = $1
        "#,
    )
    .bind(invoice_item_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Invoice item"))?;

    Ok(Json(invoice_item.into()))
}
