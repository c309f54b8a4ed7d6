//! Product Repository
//!
//! The four product collections share one schema; a repository instance is
//! bound to a single table.

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Product, ProductDraft};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
    table: &'static str,
}

impl ProductRepository {
    pub fn new(db: Surreal<Any>, table: &'static str) -> Self {
        Self {
            base: BaseRepository::new(db),
            table,
        }
    }

    /// Find all products in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(format!("SELECT * FROM {} ORDER BY createdAt", self.table))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let Some(rid) = record_id(self.table, id) else {
            return Ok(None);
        };
        let product: Option<Product> = self.base.db().select(rid).await?;
        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductDraft) -> RepoResult<Product> {
        let created: Option<Product> = self.base.db().create(self.table).content(data).await?;
        created.ok_or_else(|| {
            RepoError::Database(format!("Failed to create product in {}", self.table))
        })
    }

    /// Hard delete a product, `false` if it did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let Some(rid) = record_id(self.table, id) else {
            return Ok(false);
        };
        let deleted: Option<Product> = self.base.db().delete(rid).await?;
        Ok(deleted.is_some())
    }
}
