//! Store-side schema
//!
//! Field types and asserts applied on every write, including the status
//! update, so the database rejects documents the handlers would reject.
//! Tables stay SCHEMALESS; only the listed fields are constrained.

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::models::{ORDER_TABLE, PRODUCT_TABLES};

fn product_table(table: &str) -> String {
    format!(
        r#"
        DEFINE TABLE IF NOT EXISTS {table} SCHEMALESS;
        DEFINE FIELD IF NOT EXISTS name ON {table} TYPE string
            ASSERT string::len(string::trim($value)) > 0;
        DEFINE FIELD IF NOT EXISTS price ON {table} TYPE number ASSERT $value >= 0;
        DEFINE FIELD IF NOT EXISTS imageUrl ON {table} TYPE string
            ASSERT string::len(string::trim($value)) > 0;
        DEFINE FIELD IF NOT EXISTS category ON {table} TYPE string
            ASSERT string::len(string::trim($value)) > 0;
        DEFINE FIELD IF NOT EXISTS createdAt ON {table} TYPE int;
        DEFINE FIELD IF NOT EXISTS updatedAt ON {table} TYPE int;
        "#
    )
}

fn order_table() -> String {
    format!(
        r#"
        DEFINE TABLE IF NOT EXISTS {ORDER_TABLE} SCHEMALESS;
        DEFINE FIELD IF NOT EXISTS customer ON {ORDER_TABLE} TYPE object;
        DEFINE FIELD IF NOT EXISTS cart ON {ORDER_TABLE} TYPE array;
        DEFINE FIELD IF NOT EXISTS total ON {ORDER_TABLE} TYPE number ASSERT $value >= 0;
        DEFINE FIELD IF NOT EXISTS status ON {ORDER_TABLE} TYPE string
            ASSERT $value INSIDE ['pending', 'processing', 'completed', 'cancelled'];
        DEFINE FIELD IF NOT EXISTS date ON {ORDER_TABLE} TYPE int;
        DEFINE FIELD IF NOT EXISTS createdAt ON {ORDER_TABLE} TYPE int;
        DEFINE FIELD IF NOT EXISTS updatedAt ON {ORDER_TABLE} TYPE int;
        DEFINE INDEX IF NOT EXISTS order_date ON {ORDER_TABLE} FIELDS date;
        "#
    )
}

/// Full schema script, idempotent
pub fn script() -> String {
    let mut script: String = PRODUCT_TABLES.iter().map(|t| product_table(t)).collect();
    script.push_str(&order_table());
    script
}

/// Apply the schema; safe to run on every startup
pub async fn apply(db: &Surreal<Any>) -> Result<(), surrealdb::Error> {
    db.query(script()).await?.check()?;
    Ok(())
}
