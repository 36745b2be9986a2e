use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::Trade;
use crate::services::order_store::OrderbookSnapshot;
use crate::services::OrderStore;
use crate::utils::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct OrderbookQuery {
    pub limit: Option<i64>,
}

pub async fn orderbook(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<OrderbookQuery>,
) -> Result<Json<ApiResponse<OrderbookSnapshot>>, AppError> {
    let limit = query.limit.unwrap_or(25).clamp(1, 25);
    let snapshot = OrderStore::orderbook_l2(&state.pool, &ticker, limit).await?;
    Ok(Json(ApiResponse::success(snapshot)))
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<i64>,
}

pub async fn transactions(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<ApiResponse<Vec<Trade>>>, AppError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 100);
    let trades = Trade::list_recent(&state.pool, &ticker, limit).await?;
    Ok(Json(ApiResponse::success(trades)))
}
