//! 授权中间件
//!
//! 只挂在受保护路由上 (`route_layer`), 公开路由与 404 不经过这里。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::AuthDecision;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// 授权中间件 - 交给 [`Authorizer`](crate::auth::Authorizer) 判定
///
/// | 结果 | 行为 |
/// |------|------|
/// | Allow | 继续执行处理器 |
/// | Deny | 403 Forbidden, 记录安全日志 |
pub async fn require_authorization(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    match state.authorizer.authorize(&req) {
        AuthDecision::Allow => Ok(next.run(req).await),
        AuthDecision::Deny(reason) => {
            security_log!(
                WARN,
                "access_denied",
                method = %req.method(),
                uri = %req.uri(),
                reason = %reason
            );
            Err(AppError::forbidden(reason))
        }
    }
}
