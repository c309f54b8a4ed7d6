//! Order Model
//!
//! The cart is an embedded snapshot; line items are not addressable on
//! their own.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use shared::models::OrderStatus;
use surrealdb::RecordId;

/// Customer block embedded in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Cart line item
///
/// `price` is kept as text (currency amount as sent by the storefront).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Number,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub quantity: i64,
}

/// Stored order document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub customer: Customer,
    pub cart: Vec<CartItem>,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Validated order ready to be written (id assigned by the store)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer: Customer,
    pub cart: Vec<CartItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}
