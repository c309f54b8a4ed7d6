//! 路由描述表
//!
//! 路由先被描述为 [`RouteSpec`] 列表 (纯数据, 不依赖运行状态),
//! 再由 [`compose`] 组装成 axum Router。受保护路由在组装时挂上授权中间件。
//!
//! | 路径 | 方法 | 访问 |
//! |------|------|------|
//! | / | GET | 公开 |
//! | /health | GET | 公开 |
//! | /{collection} | GET | 公开 |
//! | /{collection} | POST | 受保护 |
//! | /{collection}/{id} | DELETE | 受保护 |
//! | /orders | GET | 受保护 |
//! | /orders | POST | 公开 |
//! | /orders/{id} | PUT | 受保护 |
//! | /orders/{id} | DELETE | 受保护 |

use axum::handler::Handler;
use axum::routing::{self, MethodRouter};
use axum::{Router, middleware};
use http::Method;

use crate::auth::require_authorization;
use crate::core::ServerState;

use super::{health, orders, products, root};

/// Whether a route passes through the authorization hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Guarded,
}

/// One route: method, path, access level and its handler
pub struct RouteSpec {
    pub method: Method,
    pub path: String,
    pub access: Access,
    handler: MethodRouter<ServerState>,
}

impl RouteSpec {
    pub fn get<H, T>(path: impl Into<String>, access: Access, handler: H) -> Self
    where
        H: Handler<T, ServerState>,
        T: 'static,
    {
        Self::new(Method::GET, path, access, routing::get(handler))
    }

    pub fn post<H, T>(path: impl Into<String>, access: Access, handler: H) -> Self
    where
        H: Handler<T, ServerState>,
        T: 'static,
    {
        Self::new(Method::POST, path, access, routing::post(handler))
    }

    pub fn put<H, T>(path: impl Into<String>, access: Access, handler: H) -> Self
    where
        H: Handler<T, ServerState>,
        T: 'static,
    {
        Self::new(Method::PUT, path, access, routing::put(handler))
    }

    pub fn delete<H, T>(path: impl Into<String>, access: Access, handler: H) -> Self
    where
        H: Handler<T, ServerState>,
        T: 'static,
    {
        Self::new(Method::DELETE, path, access, routing::delete(handler))
    }

    fn new(
        method: Method,
        path: impl Into<String>,
        access: Access,
        handler: MethodRouter<ServerState>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            access,
            handler,
        }
    }
}

impl std::fmt::Debug for RouteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSpec")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// Every API route of the server
pub fn route_table() -> Vec<RouteSpec> {
    let mut table = vec![
        RouteSpec::get("/", Access::Public, root::index),
        RouteSpec::get("/health", Access::Public, health::health),
    ];
    for collection in products::COLLECTIONS {
        table.extend(products::routes(collection));
    }
    table.extend(orders::routes());
    table
}

/// Build a router from route descriptors
///
/// Routes sharing a path are merged per method; the authorization layer
/// only wraps the guarded methods.
pub fn compose(specs: Vec<RouteSpec>, state: &ServerState) -> Router<ServerState> {
    specs.into_iter().fold(Router::new(), |router, spec| {
        let handler = match spec.access {
            Access::Public => spec.handler,
            Access::Guarded => spec.handler.route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_authorization,
            )),
        };
        tracing::debug!(
            method = %spec.method,
            path = %spec.path,
            access = ?spec.access,
            "Route registered"
        );
        router.route(&spec.path, handler)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_of(table: &[RouteSpec], method: Method, path: &str) -> Option<Access> {
        table
            .iter()
            .find(|r| r.method == method && r.path == path)
            .map(|r| r.access)
    }

    #[test]
    fn test_route_table_covers_collections() {
        let table = route_table();
        for route in ["bestproduct", "allproducts", "collections", "bestseller"] {
            let base = format!("/{route}");
            let item = format!("/{route}/{{id}}");
            assert_eq!(access_of(&table, Method::GET, &base), Some(Access::Public));
            assert_eq!(access_of(&table, Method::POST, &base), Some(Access::Guarded));
            assert_eq!(access_of(&table, Method::DELETE, &item), Some(Access::Guarded));
        }
    }

    #[test]
    fn test_route_table_orders() {
        let table = route_table();
        assert_eq!(access_of(&table, Method::GET, "/orders"), Some(Access::Guarded));
        assert_eq!(access_of(&table, Method::POST, "/orders"), Some(Access::Public));
        assert_eq!(
            access_of(&table, Method::PUT, "/orders/{id}"),
            Some(Access::Guarded)
        );
        assert_eq!(
            access_of(&table, Method::DELETE, "/orders/{id}"),
            Some(Access::Guarded)
        );
    }

    #[test]
    fn test_route_table_has_no_duplicates() {
        let table = route_table();
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "duplicate route {} {}",
                    a.method,
                    a.path
                );
            }
        }
        // 2 shell + 4 collections x 3 + 4 order routes
        assert_eq!(table.len(), 18);
    }
}
