use std::sync::Arc;

use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::services::AdminService;
use crate::utils::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct BalanceAdjustmentRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 20))]
    pub ticker: String,
    #[validate(range(min = 1))]
    pub amount: i64,
}

pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BalanceAdjustmentRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    AdminService::deposit(&state.pool, body.user_id, &body.ticker, body.amount).await?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BalanceAdjustmentRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    AdminService::withdraw(&state.pool, body.user_id, &body.ticker, body.amount).await?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    AdminService::delete_user(&state.pool, user_id).await?;
    Ok(Json(ApiResponse::success(())))
}
