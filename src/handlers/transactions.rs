//! Transaction HTTP handlers.
//!
//! - GET /api/v1/transactions - List all payment attempts
//! - GET /api/v1/transactions/:id - Get payment attempt by ID

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{Transaction, TransactionResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all transactions, newest first.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 9,
///     "invoice_id": 4,
///     "credit_card_number": 12345678,
///     "result": "success"
///   }
/// ]
/// ```
pub async fn list_transactions(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, invoice_id, credit_card_number, result, created_at, updated_at
        FROM transactions
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<TransactionResponse> = transactions.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific transaction by ID, or 404.
pub async fn get_transaction(
    State(pool): State<DbPool>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, invoice_id, credit_card_number, result, created_at, updated_at
        FROM transactions
        WHERE id = $1
        "#,
    )
    .bind(transaction_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Transaction"))?;

    Ok(Json(transaction.into()))
}
