use super::error::ServerError;

/// 服务器配置 - 所有配置项都来自环境变量
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | (必填) | SurrealDB 连接串, 如 `ws://127.0.0.1:8000`, `mem://` |
/// | DB_NAMESPACE | shop | SurrealDB namespace |
/// | DB_DATABASE | shop | SurrealDB database |
/// | DB_USERNAME / DB_PASSWORD | - | 远程数据库 root 登录 |
/// | DB_CONNECT_TIMEOUT_MS | 5000 | 建立连接的超时(毫秒) |
/// | PORT | 5000 | HTTP 服务端口 |
/// | IMAGES_DIR | public/images | 静态图片目录 |
/// | STRICT_STATUS_TRANSITIONS | false | 订单状态是否按状态机校验 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=ws://127.0.0.1:8000 PORT=8080 cargo run -p shop-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据库连接串
    pub database_url: String,
    pub db_namespace: String,
    pub db_database: String,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    /// 建立数据库连接的超时 (毫秒)
    pub db_connect_timeout_ms: u64,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// `/images` 对应的本地目录
    pub images_dir: String,
    /// 订单状态更新是否校验状态机
    pub strict_status_transitions: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 除 `DATABASE_URL` 外都有默认值
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key-value 来源加载配置
    ///
    /// 常用于测试场景
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ServerError::Config("DATABASE_URL must be set".into()))?;

        Ok(Self::assemble(database_url, var))
    }

    /// 使用给定的数据库连接串, 其余取默认值
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self::assemble(database_url.into(), |_| None)
    }

    fn assemble(database_url: String, var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url,
            db_namespace: var("DB_NAMESPACE").unwrap_or_else(|| "shop".into()),
            db_database: var("DB_DATABASE").unwrap_or_else(|| "shop".into()),
            db_username: var("DB_USERNAME"),
            db_password: var("DB_PASSWORD"),
            db_connect_timeout_ms: var("DB_CONNECT_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            http_port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(5000),
            images_dir: var("IMAGES_DIR").unwrap_or_else(|| "public/images".into()),
            strict_status_transitions: var("STRICT_STATUS_TRANSITIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        }
    }
}
