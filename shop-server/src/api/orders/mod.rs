//! Order API 模块
//!
//! 创建订单公开 (店面下单), 其余操作受保护。

mod handler;

use crate::api::routes::{Access, RouteSpec};

pub fn routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::get("/orders", Access::Guarded, handler::list),
        RouteSpec::post("/orders", Access::Public, handler::create),
        RouteSpec::put("/orders/{id}", Access::Guarded, handler::update_status),
        RouteSpec::delete("/orders/{id}", Access::Guarded, handler::delete),
    ]
}
