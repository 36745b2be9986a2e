use std::sync::Arc;

use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use validator::Validate;

use crate::models::Instrument;
use crate::services::AdminService;
use crate::utils::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInstrumentRequest {
    #[validate(length(min = 1, max = 20))]
    pub ticker: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn create_instrument(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateInstrumentRequest>,
) -> Result<Json<ApiResponse<Instrument>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let instrument = AdminService::create_instrument(
        &state.pool,
        &body.ticker,
        body.name.as_deref(),
        body.description.as_deref(),
    )
    .await?;

    Ok(Json(ApiResponse::success(instrument)))
}

pub async fn list_instruments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Instrument>>>, AppError> {
    let instruments = Instrument::list(&state.pool).await?;
    Ok(Json(ApiResponse::success(instruments)))
}

pub async fn delete_instrument(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    AdminService::delete_instrument(&state.pool, &ticker).await?;
    Ok(Json(ApiResponse::success(())))
}
