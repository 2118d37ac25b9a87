//! Sales reporting queries.
//!
//! This service implements the aggregate reports:
//! - Best sales day for an item
//! - Top items ranked by revenue
//! - Top items ranked by quantity sold
//!
//! # Paid Invoices Only
//!
//! Every report filters to paid invoices: invoices with at least one
//! transaction whose `result = 'success'`. The filter is an `EXISTS`
//! semi-join rather than an inner join, so an invoice that took several
//! payment attempts is still counted exactly once.

use chrono::{DateTime, Utc};

use crate::{
    db::DbPool,
    error::AppError,
    models::item::{ItemRevenue, ItemSales},
};

/// Find the invoice timestamp with the highest total quantity of an item
/// sold across paid invoices.
///
/// Quantities are summed per invoice timestamp; ties break toward the
/// most recent one.
///
/// # Returns
///
/// `None` when the item has no line items on any paid invoice.
pub async fn best_day(pool: &DbPool, item_id: i64) -> Result<Option<DateTime<Utc>>, AppError> {
    let day = sqlx::query_scalar::<_, DateTime<Utc>>(
        r#"
        SELECT invoices.created_at
        FROM invoice_items
        JOIN invoices ON invoices.id = invoice_items.invoice_id
        WHERE invoice_items.item_id = $1
          AND EXISTS (
              SELECT 1 FROM transactions
              WHERE transactions.invoice_id = invoices.id
                AND transactions.result = 'success'
          )
        GROUP BY invoices.created_at
        ORDER BY SUM(invoice_items.quantity) DESC, invoices.created_at DESC
        LIMIT 1
        "#,
    )
    .bind(item_id)
    .fetch_optional(pool)
    .await?;

    Ok(day)
}

/// Rank items by total revenue across paid invoices, descending.
///
/// Revenue is `SUM(quantity * unit_price_cents)` over the line items;
/// the sum is cast back to BIGINT since Postgres widens SUM(bigint) to
/// NUMERIC. Items with no paid sales do not appear at all.
pub async fn most_revenue(pool: &DbPool, limit: i64) -> Result<Vec<ItemRevenue>, AppError> {
    let items = sqlx::query_as::<_, ItemRevenue>(
        r#"
        SELECT items.id, items.name, items.description, items.unit_price_cents,
               items.merchant_id,
               SUM(invoice_items.quantity * invoice_items.unit_price_cents)::BIGINT
                   AS revenue_cents
        FROM items
        JOIN invoice_items ON invoice_items.item_id = items.id
        JOIN invoices ON invoices.id = invoice_items.invoice_id
        WHERE EXISTS (
            SELECT 1 FROM transactions
            WHERE transactions.invoice_id = invoices.id
              AND transactions.result = 'success'
        )
        GROUP BY items.id
        ORDER BY revenue_cents DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Rank items by total quantity sold across paid invoices, descending.
pub async fn most_items(pool: &DbPool, limit: i64) -> Result<Vec<ItemSales>, AppError> {
    let items = sqlx::query_as::<_, ItemSales>(
        r#"
        SELECT items.id, items.name, items.description, items.unit_price_cents,
               items.merchant_id,
               SUM(invoice_items.quantity)::BIGINT AS items_sold
        FROM items
        JOIN invoice_items ON invoice_items.item_id = items.id
        JOIN invoices ON invoices.id = invoice_items.invoice_id
        WHERE EXISTS (
            SELECT 1 FROM transactions
            WHERE transactions.invoice_id = invoices.id
              AND transactions.result = 'success'
        )
        GROUP BY items.id
        ORDER BY items_sold DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(items)
}
