//! 统一错误处理
//!
//! 处理器统一返回 [`AppResult`], 错误体格式:
//!
//! ```json
//! { "code": 2, "message": "name is required", "details": { "field": "name" } }
//! ```
//!
//! - 仓储层 [`RepoError`] 通过 `From` 转换
//! - JSON 解析失败通过 [`AppJson`] 转为 400 (axum 默认是 422)

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::db::repository::RepoError;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// JSON body extractor with the unified error body
///
/// Syntax errors, wrong content type and type mismatches all map to
/// [`ErrorCode::InvalidRequest`] (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::invalid_request(rejection.body_text())),
        }
    }
}
