//! Shop Server - 店面商品与订单后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB (任意引擎: `mem://`, `ws://` ...)
//! - **授权** (`auth`): 可替换的 [`Authorizer`] 钩子, 默认放行
//! - **HTTP API** (`api`): 路由描述表 + 处理器
//!
//! # 模块结构
//!
//! ```text
//! shop-server/src/
//! ├── core/          # 配置、状态、启动
//! ├── auth/          # 授权钩子与中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── utils/         # 错误、校验、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use auth::{AllowAll, AuthDecision, Authorizer};
pub use crate::core::{Config, Server, ServerError, ServerState, build_app};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Security log helper - records security-related events
///
/// # Examples
/// ```ignore
/// security_log!(WARN, "access_denied", uri = %req.uri(), reason = %reason);
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "WARN",
            $($arg)*
        );
    };
}
