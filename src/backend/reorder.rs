//! Batch Order Persistence
//!
//! Applies a `[{id, order}]` batch to the cards or lists table inside one
//! transaction. The batch either lands completely or not at all:
//!
//! - an id that matches no row fails the batch with `NotFound`
//! - a row on a board the caller cannot access fails it with `Forbidden`
//! - a `list_id` naming a list on another board fails it with `ValidationError`
//! - a store error such as the `order >= 1` CHECK fails it with
//!   `TransactionFailure`
//!
//! In every failure case the transaction is rolled back before the error is
//! returned. Batches are applied as given: the server does not require that
//! the batch cover every member of a collection.

use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::backend::boards::access::{require_card_access, require_list_access};
use crate::backend::error::BackendError;
use crate::shared::kanban::OrderUpdate;

/// Table holding an ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedTable {
    Cards,
    Lists,
}

impl OrderedTable {
    /// Entity name used in error messages
    pub fn entity(self) -> &'static str {
        match self {
            OrderedTable::Cards => "card",
            OrderedTable::Lists => "list",
        }
    }

    /// Name of the batch field in the request body
    pub fn field(self) -> &'static str {
        match self {
            OrderedTable::Cards => "cards",
            OrderedTable::Lists => "lists",
        }
    }

    fn update_order_sql(self) -> &'static str {
        match self {
            OrderedTable::Cards => r#"UPDATE cards SET "order" = $1 WHERE id = $2"#,
            OrderedTable::Lists => r#"UPDATE lists SET "order" = $1 WHERE id = $2"#,
        }
    }
}

/// Reject batches that must not reach the store
///
/// A batch must be non-empty, and `list_id` is only meaningful on cards.
pub fn validate_batch(table: OrderedTable, updates: &[OrderUpdate]) -> Result<(), BackendError> {
    if updates.is_empty() {
        return Err(BackendError::validation(format!(
            "Invalid data: {} must be a non-empty array",
            table.field()
        )));
    }
    if table == OrderedTable::Lists && updates.iter().any(|u| u.list_id.is_some()) {
        return Err(BackendError::validation(
            "Invalid data: list_id is only accepted on card batches",
        ));
    }
    Ok(())
}

/// Apply a batch of order writes in one transaction
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `table` - Which collection the ids belong to
/// * `user_id` - Caller; every touched board must be accessible to them
/// * `updates` - The `{id, order, list_id?}` entries, applied in sequence
///
/// # Returns
///
/// Number of rows written
pub async fn apply_batch(
    pool: &SqlitePool,
    table: OrderedTable,
    user_id: Uuid,
    updates: &[OrderUpdate],
) -> Result<u64, BackendError> {
    validate_batch(table, updates)?;

    let mut tx = pool.begin().await?;
    match write_batch(&mut tx, table, user_id, updates).await {
        Ok(updated) => {
            tx.commit().await.map_err(|e| {
                tracing::error!("Failed to commit {} batch: {}", table.entity(), e);
                BackendError::transaction(e.to_string())
            })?;
            tracing::debug!("Applied {} {} order updates", updated, table.entity());
            Ok(updated)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Rollback of {} batch failed: {}", table.entity(), rollback_err);
            }
            tracing::warn!("Rolled back {} batch: {}", table.entity(), err);
            Err(err)
        }
    }
}

async fn write_batch(
    tx: &mut Transaction<'_, Sqlite>,
    table: OrderedTable,
    user_id: Uuid,
    updates: &[OrderUpdate],
) -> Result<u64, BackendError> {
    let mut updated = 0;

    for update in updates {
        let board_id = match table {
            OrderedTable::Cards => require_card_access(&mut **tx, update.id, user_id).await?,
            OrderedTable::Lists => require_list_access(&mut **tx, update.id, user_id).await?,
        };
        if let Some(list_id) = update.list_id {
            if require_list_access(&mut **tx, list_id, user_id).await? != board_id {
                return Err(BackendError::validation(format!(
                    "Invalid data: list {} is on another board",
                    list_id
                )));
            }
        }

        let result = match update.list_id {
            Some(list_id) => {
                sqlx::query(r#"UPDATE cards SET "order" = $1, list_id = $2 WHERE id = $3"#)
                    .bind(update.order)
                    .bind(list_id)
                    .bind(update.id)
                    .execute(&mut **tx)
                    .await
            }
            None => {
                sqlx::query(table.update_order_sql())
                    .bind(update.order)
                    .bind(update.id)
                    .execute(&mut **tx)
                    .await
            }
        }
        .map_err(|e| BackendError::transaction(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BackendError::not_found(table.entity()));
        }
        updated += result.rows_affected();
    }

    Ok(updated)
}
