use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::auth::AuthUser;
use crate::models::Balance;
use crate::utils::{ApiResponse, AppError};
use crate::AppState;

pub async fn get_balances(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<Balance>>>, AppError> {
    let balances = Balance::get_for_user(&state.pool, auth.user.id).await?;
    Ok(Json(ApiResponse::success(balances)))
}
