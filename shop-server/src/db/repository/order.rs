//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{ORDER_TABLE, Order, OrderDraft};
use serde::Serialize;
use shared::models::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// MERGE payload for a status change
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusPatch {
    status: OrderStatus,
    updated_at: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY date DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let Some(rid) = record_id(ORDER_TABLE, id) else {
            return Ok(None);
        };
        let order: Option<Order> = self.base.db().select(rid).await?;
        Ok(order)
    }

    /// Create a new order
    pub async fn create(&self, data: OrderDraft) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Set the status of an existing order
    ///
    /// With `strict` the current status is read first and the change must be
    /// a legal lifecycle step. UPDATE never creates a record, so a missing
    /// order surfaces as `NotFound`.
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
        strict: bool,
        now: i64,
    ) -> RepoResult<Order> {
        let rid = record_id(ORDER_TABLE, id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        if strict {
            let current: Option<Order> = self.base.db().select(rid.clone()).await?;
            let current =
                current.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;
            if !current.status.can_transition_to(status) {
                return Err(RepoError::Validation(format!(
                    "Cannot change order status from {} to {}",
                    current.status, status
                )));
            }
        }

        let updated: Option<Order> = self
            .base
            .db()
            .update(rid)
            .merge(StatusPatch {
                status,
                updated_at: now,
            })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Hard delete an order, `false` if it did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let Some(rid) = record_id(ORDER_TABLE, id) else {
            return Ok(false);
        };
        let deleted: Option<Order> = self.base.db().delete(rid).await?;
        Ok(deleted.is_some())
    }
}
