//! 启动期错误
//!
//! 只在进程启动 (配置, 数据库连接, 端口绑定) 阶段出现, 处理器使用 [`AppError`](shared::AppError)。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库连接失败: {0}")]
    Database(String),

    #[error("数据库连接超时 ({0} ms)")]
    ConnectTimeout(u64),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
