//! 授权模块
//!
//! 受保护路由在进入处理器前经过 [`Authorizer`] 判定。
//! 默认实现 [`AllowAll`] 放行一切请求, 真正的认证方案通过替换实现接入,
//! 路由与处理器无需改动。

mod authorizer;
mod middleware;

pub use authorizer::{AllowAll, AuthDecision, Authorizer, DenyAll};
pub use middleware::require_authorization;
