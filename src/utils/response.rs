#![allow(dead_code)]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: &str, message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// The one error currency for the whole service. Every variant maps to exactly
/// one HTTP status code; domain errors convert into this at the service boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("instrument not found: {0}")]
    InstrumentNotFound(String),
    #[error("lock contention exhausted retries")]
    RetryExhausted,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
            AppError::InstrumentNotFound(_) => "INSTRUMENT_NOT_FOUND",
            AppError::RetryExhausted => "RETRY_EXHAUSTED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InsufficientFunds(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InstrumentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RetryExhausted => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        AppError::Internal(err.to_string())
    }
}

impl From<crate::services::LedgerError> for AppError {
    fn from(err: crate::services::LedgerError) -> Self {
        use crate::services::LedgerError as E;
        match err {
            E::InsufficientFunds { .. } | E::InsufficientLocked { .. } => {
                AppError::InsufficientFunds(err.to_string())
            }
            E::RetryExhausted => AppError::RetryExhausted,
            E::Database(e) => e.into(),
        }
    }
}

impl From<crate::services::matching::MatchingError> for AppError {
    fn from(err: crate::services::matching::MatchingError) -> Self {
        use crate::services::matching::MatchingError as E;
        match err {
            E::Ledger(e) => e.into(),
            E::Database(e) => e.into(),
        }
    }
}

impl From<crate::services::OrderServiceError> for AppError {
    fn from(err: crate::services::OrderServiceError) -> Self {
        use crate::services::OrderServiceError as E;
        match err {
            E::InvalidQty | E::InvalidPrice => AppError::Validation(err.to_string()),
            E::InstrumentNotFound(t) => AppError::InstrumentNotFound(t),
            E::OrderNotFound(id) => AppError::NotFound(format!("order {id}")),
            E::Forbidden => AppError::Forbidden,
            E::NotCancellable => AppError::Conflict(err.to_string()),
            E::NoLiquidity => AppError::Conflict(err.to_string()),
            E::Ledger(e) => e.into(),
            E::Matching(e) => e.into(),
            E::Database(e) => e.into(),
        }
    }
}

impl From<crate::services::AdminServiceError> for AppError {
    fn from(err: crate::services::AdminServiceError) -> Self {
        use crate::services::AdminServiceError as E;
        match err {
            E::InstrumentExists(t) => AppError::Conflict(format!("instrument already exists: {t}")),
            E::InstrumentNotFound(t) => AppError::InstrumentNotFound(t),
            E::InstrumentInUse(t) => AppError::Conflict(format!("instrument still has open orders: {t}")),
            E::UserNotFound(id) => AppError::NotFound(format!("user {id}")),
            E::Ledger(e) => e.into(),
            E::Database(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiResponse::<()>::error(self.code(), &self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_maps_to_422() {
        let err = AppError::InsufficientFunds("need 120, have 100".to_string());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "INSUFFICIENT_FUNDS");
    }

    #[test]
    fn not_cancellable_order_maps_to_conflict() {
        let err: AppError = crate::services::OrderServiceError::NotCancellable.into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn retry_exhausted_maps_to_503() {
        let err: AppError = crate::services::LedgerError::RetryExhausted.into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn forbidden_order_maps_to_403() {
        let err: AppError = crate::services::OrderServiceError::Forbidden.into();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }
}
