use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::models::order::Direction;
use crate::models::Order;
use crate::services::OrderService;
use crate::utils::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    #[validate(length(min = 1, max = 20))]
    pub ticker: String,
    pub direction: Direction,
    #[validate(range(min = 1))]
    pub qty: i64,
    /// Omitted for a market order.
    pub price: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn default_limit(raw: Option<i64>) -> i64 {
    raw.unwrap_or(20).clamp(1, 200)
}

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub order: Order,
}

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<Json<ApiResponse<PlaceOrderResponse>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let order = OrderService::place(
        &state.pool,
        auth.user.id,
        &body.ticker,
        body.direction,
        body.qty,
        body.price,
    )
    .await?;

    Ok(Json(ApiResponse::success(PlaceOrderResponse { order })))
}

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<ApiResponse<Vec<Order>>>, AppError> {
    let limit = default_limit(query.limit);
    let offset = query.offset.unwrap_or(0).max(0);
    let orders = OrderService::list_orders(&state.pool, auth.user.id, limit, offset).await?;
    Ok(Json(ApiResponse::success(orders)))
}

pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let order = OrderService::get_order(&state.pool, order_id, auth.user.id).await?;
    Ok(Json(ApiResponse::success(order)))
}

pub async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let order = OrderService::cancel(&state.pool, order_id, auth.user.id).await?;
    Ok(Json(ApiResponse::success(order)))
}
