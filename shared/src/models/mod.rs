//! Data models
//!
//! Request payloads and domain enums shared between the server and its
//! clients. Stored documents live with the server's database layer.

pub mod order;
pub mod product;

// Re-exports
pub use order::*;
pub use product::*;
