//! Shared types for the storefront backend
//!
//! Error types, response structures and request models used by the server
//! and by anything talking to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
