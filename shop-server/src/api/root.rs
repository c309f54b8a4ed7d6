//! 根路由与 404 兜底

use axum::http::Uri;

use crate::utils::AppError;

/// GET / - 存活文本
pub async fn index() -> &'static str {
    "API is running..."
}

/// 未匹配路由 - 统一 JSON 404
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
