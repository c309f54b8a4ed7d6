//! Product Model
//!
//! Shared by the four product collections.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Stored product document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Validated product ready to be written (id assigned by the store)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub created_at: i64,
    pub updated_at: i64,
}
