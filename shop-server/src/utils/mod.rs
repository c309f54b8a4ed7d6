//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`AppJson`] - 请求体提取器, 解析失败返回 400
//! - 校验, 日志等工具

pub mod error;
pub mod logger;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{ApiResponse, AppError, AppJson, AppResult, ErrorCategory, ErrorCode};
