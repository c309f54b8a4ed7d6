//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::RepoError;
use crate::utils::validation::{validate_order, validate_status};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};
use shared::models::{OrderCreate, OrderStatusUpdate};
use shared::util::now_millis;

/// GET /orders - 获取全部订单 (按下单时间倒序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders().find_all().await?;
    Ok(Json(orders))
}

/// POST /orders - 创建订单
///
/// 总价按客户端提交值保存, 不根据购物车重新计算
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let draft = validate_order(payload, now_millis())?;
    let order = state.orders().create(draft).await?;

    tracing::info!(
        id = %order.id,
        items = order.cart.len(),
        total = order.total,
        "Order created"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/{id} - 更新订单状态
///
/// 开启 `STRICT_STATUS_TRANSITIONS` 时按状态机校验, 否则接受任意合法状态值
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let status = validate_status(payload.status.as_deref())?;
    let strict = state.config.strict_status_transitions;

    let order = state
        .orders()
        .update_status(&id, status, strict, now_millis())
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => {
                AppError::new(ErrorCode::OrderNotFound).with_detail("id", id.as_str())
            }
            RepoError::Validation(msg) => {
                AppError::with_message(ErrorCode::OrderInvalidTransition, msg)
            }
            other => other.into(),
        })?;

    tracing::info!(id = %order.id, status = %order.status, "Order status updated");
    Ok(Json(order))
}

/// DELETE /orders/{id} - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = state.orders().delete(&id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", id));
    }

    tracing::info!(id = %id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}
