//! API 路由模块
//!
//! # 结构
//!
//! - [`routes`] - 路由描述表与组装
//! - [`root`] - 存活文本, 404 兜底
//! - [`health`] - 健康检查
//! - [`products`] - 四个商品集合 (同一套处理器)
//! - [`orders`] - 订单接口

pub mod health;
pub mod orders;
pub mod products;
pub mod root;
pub mod routes;

pub use routes::{Access, RouteSpec, compose, route_table};
