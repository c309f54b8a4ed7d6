//! Repository Module
//!
//! CRUD over the SurrealDB tables. One repository per document shape; the
//! product repository is parameterized by table.

pub mod order;
pub mod product;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;

use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 文档里的 id 统一为 "table:key"
// =============================================================================
//
// 路径参数两种写法都接受:
//   - 纯 key:        /orders/abc123
//   - 完整 RecordId: /orders/orders:abc123
// 表名不匹配 / key 为空 视为不存在 (返回 None, 由调用方转为 404)

/// Resolve a path identifier to a record of `table`
pub fn record_id(table: &str, id: &str) -> Option<RecordId> {
    let key = match id.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        Some(_) => return None,
        None => id,
    };
    if key.is_empty() {
        return None;
    }
    Some(RecordId::from_table_key(table, key))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_bare_key() {
        let id = record_id("orders", "abc123").unwrap();
        assert_eq!(id, RecordId::from_table_key("orders", "abc123"));
    }

    #[test]
    fn test_record_id_full_form() {
        let id = record_id("orders", "orders:abc123").unwrap();
        assert_eq!(id, RecordId::from_table_key("orders", "abc123"));
    }

    #[test]
    fn test_record_id_rejects_other_table() {
        assert!(record_id("orders", "bestseller:abc123").is_none());
    }

    #[test]
    fn test_record_id_rejects_empty_key() {
        assert!(record_id("orders", "").is_none());
        assert!(record_id("orders", "orders:").is_none());
    }
}
