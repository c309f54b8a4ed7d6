//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::Collection;
use crate::core::ServerState;
use crate::db::models::Product;
use crate::utils::validation::validate_product;
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};
use shared::models::ProductCreate;
use shared::util::now_millis;

/// GET /{collection} - 获取集合内全部商品
pub async fn list(
    State(state): State<ServerState>,
    collection: Collection,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.products(collection.table).find_all().await?;
    Ok(Json(products))
}

/// POST /{collection} - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    collection: Collection,
    AppJson(payload): AppJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let draft = validate_product(payload, now_millis())?;
    let product = state.products(collection.table).create(draft).await?;

    tracing::info!(
        collection = collection.route,
        id = %product.id,
        name = %product.name,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /{collection}/{id} - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    collection: Collection,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = state.products(collection.table).delete(&id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::ProductNotFound).with_detail("id", id));
    }

    tracing::info!(collection = collection.route, id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
