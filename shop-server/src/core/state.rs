use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::auth::{AllowAll, Authorizer};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{OrderRepository, ProductRepository};

/// 服务器状态 - 处理器共享的全部依赖
///
/// 克隆成本极低 (Surreal 句柄与 Arc), 每个请求各持一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | Surreal<Any> | 数据库句柄 |
/// | authorizer | Arc<dyn Authorizer> | 受保护路由的授权钩子 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Arc<Config>,
    /// 数据库句柄
    pub db: Surreal<Any>,
    /// 授权钩子, 默认 [`AllowAll`]
    pub authorizer: Arc<dyn Authorizer>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db: db.db,
            authorizer: Arc::new(AllowAll),
        }
    }

    /// 连接数据库并构造状态
    ///
    /// 连接失败或超时直接返回错误, 不重试
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(config).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 替换授权钩子
    pub fn with_authorizer(mut self, authorizer: impl Authorizer) -> Self {
        self.authorizer = Arc::new(authorizer);
        self
    }

    /// 绑定到指定表的商品仓储
    pub fn products(&self, table: &'static str) -> ProductRepository {
        ProductRepository::new(self.db.clone(), table)
    }

    /// 订单仓储
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.db.clone())
    }
}
