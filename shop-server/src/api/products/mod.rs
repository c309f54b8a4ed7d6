//! Product API 模块
//!
//! 四个商品集合共用一套处理器, 由 [`routes`] 按集合生成路由描述。

mod handler;

use axum::extract::{Path, State};

use crate::api::routes::{Access, RouteSpec};
use crate::core::ServerState;
use crate::db::models::{
    ALL_PRODUCT_TABLE, BEST_PRODUCT_TABLE, BEST_SELLER_TABLE, COLLECTION_TABLE,
};
use crate::utils::AppJson;
use shared::models::ProductCreate;

/// A product table exposed under a route name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub table: &'static str,
    pub route: &'static str,
}

pub const COLLECTIONS: [Collection; 4] = [
    Collection {
        table: BEST_PRODUCT_TABLE,
        route: "bestproduct",
    },
    Collection {
        table: ALL_PRODUCT_TABLE,
        route: "allproducts",
    },
    Collection {
        table: COLLECTION_TABLE,
        route: "collections",
    },
    Collection {
        table: BEST_SELLER_TABLE,
        route: "bestseller",
    },
];

/// List / create / delete routes for one collection
pub fn routes(collection: Collection) -> Vec<RouteSpec> {
    let base = format!("/{}", collection.route);
    let item = format!("/{}/{{id}}", collection.route);

    vec![
        RouteSpec::get(&base, Access::Public, move |state: State<ServerState>| {
            handler::list(state, collection)
        }),
        RouteSpec::post(
            &base,
            Access::Guarded,
            move |state: State<ServerState>, body: AppJson<ProductCreate>| {
                handler::create(state, collection, body)
            },
        ),
        RouteSpec::delete(
            &item,
            Access::Guarded,
            move |state: State<ServerState>, id: Path<String>| {
                handler::delete(state, collection, id)
            },
        ),
    ]
}
