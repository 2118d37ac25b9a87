//! Item HTTP handlers.
//!
//! This module implements the item-related API endpoints:
//! - GET /api/v1/items - List all items
//! - GET /api/v1/items/:id - Get item by ID
//! - GET /api/v1/items/:id/invoice_items - List line items for an item
//! - GET /api/v1/items/:id/merchant - Get the item's merchant
//! - GET /api/v1/items/:id/best_day - Best sales day for an item
//! - GET /api/v1/items/most_revenue?quantity=N - Top items by revenue
//! - GET /api/v1/items/most_items?quantity=N - Top items by quantity sold

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        invoice_item::{InvoiceItem, InvoiceItemResponse},
        item::{BestDayResponse, Item, ItemResponse, ItemRevenue, ItemSales},
        merchant::{Merchant, MerchantResponse},
    },
    services::reports,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

/// How many ranked items the report endpoints return when the request
/// does not say.
const DEFAULT_RANKING_LIMIT: i64 = 5;

/// Query string for the ranking endpoints: `?quantity=N`.
#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub quantity: Option<i64>,
}

/// Resolve the requested ranking size.
///
/// Absent means the default; zero or negative is a 400.
fn ranking_limit(params: &RankingParams) -> Result<i64, AppError> {
    match params.quantity {
        None => Ok(DEFAULT_RANKING_LIMIT),
        Some(n) if n > 0 => Ok(n),
        Some(n) => Err(AppError::InvalidRequest(format!(
            "quantity must be positive, got {n}"
        ))),
    }
}

/// List all items, newest first.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 7,
///     "name": "Bacon",
///     "description": "Thick cut",
///     "unit_price_cents": 345,
///     "merchant_id": 2
///   }
/// ]
/// ```
pub async fn list_items(State(pool): State<DbPool>) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, description, unit_price_cents, merchant_id, created_at, updated_at
        FROM items
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<ItemResponse> = items.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific item by ID, or 404.
pub async fn get_item(
    State(pool): State<DbPool>,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, description, unit_price_cents, merchant_id, created_at, updated_at
        FROM items
        WHERE id = $1
        "#,
    )
    .bind(item_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Item"))?;

    Ok(Json(item.into()))
}

/// List the invoice line items referencing an item.
///
/// Returns 404 when the item does not exist; an item that was never sold
/// gets an empty array.
pub async fn list_item_invoice_items(
    State(pool): State<DbPool>,
    Path(item_id): Path<i64>,
) -> Result<Json<Vec<InvoiceItemResponse>>, AppError> {
    let item_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)")
        .bind(item_id)
        .fetch_one(&pool)
        .await?;

    if !item_exists {
        return Err(AppError::NotFound("Item"));
    }

    let invoice_items = sqlx::query_as::<_, InvoiceItem>(
        r#"
        SELECT id, invoice_id, item_id, quantity, unit_price_cents, created_at, updated_at
        FROM invoice_items
        WHERE item_id = $1
        ORDER BY id
        "#,
    )
    .bind(item_id)
    .fetch_all(&pool)
    .await?;

    let responses: Vec<InvoiceItemResponse> = invoice_items.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get the merchant that sells an item.
///
/// The merchant foreign key is NOT NULL, so an empty join result means
/// the item itself is missing.
pub async fn get_item_merchant(
    State(pool): State<DbPool>,
    Path(item_id): Path<i64>,
) -> Result<Json<MerchantResponse>, AppError> {
    let merchant = sqlx::query_as::<_, Merchant>(
        r#"
        SELECT merchants.id, merchants.name, merchants.created_at, merchants.updated_at
        FROM merchants
        JOIN items ON items.merchant_id = merchants.id
        WHERE items.id = $1
        "#,
    )
    .bind(item_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Item"))?;

    Ok(Json(merchant.into()))
}

/// Get the best sales day for an item.
///
/// # Endpoint
///
/// `GET /api/v1/items/:id/best_day`
///
/// # Response (200 OK)
///
/// ```json
/// { "best_day": "2001-03-27T14:53:59Z" }
/// ```
///
/// The timestamp is the creation time of the paid invoice(s) with the
/// highest total quantity of this item; ties go to the most recent.
///
/// # Errors
///
/// - **404**: the item does not exist
/// - **404**: the item has no sales on any paid invoice
pub async fn get_item_best_day(
    State(pool): State<DbPool>,
    Path(item_id): Path<i64>,
) -> Result<Json<BestDayResponse>, AppError> {
    let item_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)")
        .bind(item_id)
        .fetch_one(&pool)
        .await?;

    if !item_exists {
        return Err(AppError::NotFound("Item"));
    }

    let best_day = reports::best_day(&pool, item_id)
        .await?
        .ok_or(AppError::NotFound("Best day"))?;

    Ok(Json(BestDayResponse { best_day }))
}

/// Top items ranked by total revenue across paid invoices.
///
/// # Endpoint
///
/// `GET /api/v1/items/most_revenue?quantity=N`
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 3,
///     "name": "Bacon",
///     "description": "Thick cut",
///     "unit_price_cents": 345,
///     "merchant_id": 1,
///     "revenue_cents": 15525
///   }
/// ]
/// ```
///
/// Fewer than N items come back when fewer than N items have paid sales.
pub async fn most_revenue(
    State(pool): State<DbPool>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Vec<ItemRevenue>>, AppError> {
    let limit = ranking_limit(&params)?;
    let items = reports::most_revenue(&pool, limit).await?;

    Ok(Json(items))
}

/// Top items ranked by total quantity sold across paid invoices.
///
/// # Endpoint
///
/// `GET /api/v1/items/most_items?quantity=N`
///
/// Each entry carries the item fields plus `items_sold`.
pub async fn most_items(
    State(pool): State<DbPool>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Vec<ItemSales>>, AppError> {
    let limit = ranking_limit(&params)?;
    let items = reports::most_items(&pool, limit).await?;

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_limit_defaults_when_absent() {
        let params = RankingParams { quantity: None };
        assert_eq!(ranking_limit(&params).unwrap(), DEFAULT_RANKING_LIMIT);
    }

    #[test]
    fn ranking_limit_passes_positive_values_through() {
        let params = RankingParams { quantity: Some(12) };
        assert_eq!(ranking_limit(&params).unwrap(), 12);
    }

    #[test]
    fn ranking_limit_rejects_zero_and_negative() {
        for n in [0, -1, -50] {
            let params = RankingParams { quantity: Some(n) };
            assert!(matches!(
                ranking_limit(&params),
                Err(AppError::InvalidRequest(_))
            ));
        }
    }
}
