use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;
use crate::utils::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub api_key: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisterResponse>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = User::register(&state.pool, &body.name).await?;

    Ok(Json(ApiResponse::success(RegisterResponse {
        id: user.id,
        name: user.name,
        api_key: user.api_key,
    })))
}
