//! Database Models
//!
//! Documents as stored in SurrealDB. Wire names are camelCase, timestamps
//! are Unix millis.

pub mod serde_helpers;

pub mod order;
pub mod product;

pub const BEST_PRODUCT_TABLE: &str = "bestproduct";
pub const ALL_PRODUCT_TABLE: &str = "allproduct";
pub const COLLECTION_TABLE: &str = "collection";
pub const BEST_SELLER_TABLE: &str = "bestseller";

/// Tables holding product-like documents (identical schema)
pub const PRODUCT_TABLES: [&str; 4] = [
    BEST_PRODUCT_TABLE,
    ALL_PRODUCT_TABLE,
    COLLECTION_TABLE,
    BEST_SELLER_TABLE,
];

/// Order table
pub const ORDER_TABLE: &str = "orders";

// Re-exports
pub use order::{CartItem, Customer, Order, OrderDraft};
pub use product::{Product, ProductDraft};
