//! Merchant HTTP handlers.
//!
//! This module implements the merchant-related API endpoints:
//! - GET /api/v1/merchants - List all merchants
//! - GET /api/v1/merchants/:id - Get merchant by ID
//! - GET /api/v1/merchants/:id/items - List a merchant's items

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        item::{Item, ItemResponse},
        merchant::{Merchant, MerchantResponse},
    },
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all merchants, newest first.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   { "id": 2, "name": "Billy Bobs Bacon" },
///   { "id": 1, "name": "Lady Jane" }
/// ]
/// ```
pub async fn list_merchants(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<MerchantResponse>>, AppError> {
    let merchants = sqlx::query_as::<_, Merchant>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM merchants
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<MerchantResponse> = merchants.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific merchant by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the merchant
/// - **Error (404)**: no merchant with that ID
pub async fn get_merchant(
    State(pool): State<DbPool>,
    Path(merchant_id): Path<i64>,
) -> Result<Json<MerchantResponse>, AppError> {
    let merchant = sqlx::query_as::<_, Merchant>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM merchants
        WHERE id = $1
        "#,
    )
    .bind(merchant_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Merchant"))?;

    Ok(Json(merchant.into()))
}

/// List all items sold by a merchant.
///
/// Returns 404 when the merchant itself does not exist; an existing
/// merchant with no items gets an empty array.
pub async fn list_merchant_items(
    State(pool): State<DbPool>,
    Path(merchant_id): Path<i64>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let merchant_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM merchants WHERE id = $1)")
            .bind(merchant_id)
            .fetch_one(&pool)
            .await?;

    if !merchant_exists {
        return Err(AppError::NotFound("Merchant"));
    }

    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, description, unit_price_cents, merchant_id, created_at, updated_at
        FROM items
        WHERE merchant_id = $1
        ORDER BY id
        "#,
    )
    .bind(merchant_id)
    .fetch_all(&pool)
    .await?;

    let responses: Vec<ItemResponse> = items.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
