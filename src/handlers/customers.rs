//! Customer HTTP handlers.
//!
//! - GET /api/v1/customers - List all customers
//! - GET /api/v1/customers/:id - Get customer by ID

use crate::{
    db::DbPool,
    error::AppError,
    models::customer::{Customer, CustomerResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all customers, newest first.
pub async fn list_customers(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, first_name, last_name, created_at, updated_at
        FROM customers
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<CustomerResponse> = customers.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific customer by ID, or 404.
pub async fn get_customer(
    State(pool): State<DbPool>,
    Path(customer_id): Path<i64>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, first_name, last_name, created_at, updated_at
        FROM customers
        WHERE id = $1
        "#,
    )
    .bind(customer_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Customer"))?;

    Ok(Json(customer.into()))
}
