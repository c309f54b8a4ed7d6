//! 健康检查
//!
//! # 响应示例
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": { "status": "ok", "latency_ms": 1 } }
//! ```

use std::time::Instant;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 数据库检查
    database: CheckResult,
}

/// 单项检查结果
#[derive(Debug, Serialize)]
pub struct CheckResult {
    status: &'static str,
    /// 延迟 (毫秒)
    latency_ms: u64,
}

/// GET /health - 存活探针, 同时探测数据库
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let start = Instant::now();
    state
        .db
        .health()
        .await
        .map_err(|e| AppError::database(format!("Health check failed: {e}")))?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: CheckResult {
            status: "ok",
            latency_ms: start.elapsed().as_millis() as u64,
        },
    }))
}
