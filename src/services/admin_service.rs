use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Instrument, User};
use crate::services::ledger::{Ledger, LedgerError};

#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("instrument already exists: {0}")]
    InstrumentExists(String),
    #[error("instrument not found: {0}")]
    InstrumentNotFound(String),
    #[error("instrument still has open orders: {0}")]
    InstrumentInUse(String),
    #[error("user not found: {0}")]
    UserNotFound(Uuid),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct AdminService;

impl AdminService {
    pub async fn create_instrument(
        pool: &PgPool,
        ticker: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Instrument, AdminServiceError> {
        if Instrument::exists(pool, ticker).await? {
            return Err(AdminServiceError::InstrumentExists(ticker.to_string()));
        }
        Ok(Instrument::create(pool, ticker, name, description).await?)
    }

    pub async fn delete_instrument(pool: &PgPool, ticker: &str) -> Result<(), AdminServiceError> {
        if !Instrument::exists(pool, ticker).await? {
            return Err(AdminServiceError::InstrumentNotFound(ticker.to_string()));
        }
        if Instrument::has_open_orders(pool, ticker).await? {
            return Err(AdminServiceError::InstrumentInUse(ticker.to_string()));
        }
        Instrument::delete(pool, ticker).await?;
        Ok(())
    }

    pub async fn deposit(pool: &PgPool, user_id: Uuid, ticker: &str, amount: i64) -> Result<(), AdminServiceError> {
        Ledger::deposit(pool, user_id, ticker, amount).await?;
        tracing::info!(%user_id, ticker, amount, "admin deposit");
        Ok(())
    }

    pub async fn withdraw(pool: &PgPool, user_id: Uuid, ticker: &str, amount: i64) -> Result<(), AdminServiceError> {
        Ledger::withdraw(pool, user_id, ticker, amount).await?;
        tracing::info!(%user_id, ticker, amount, "admin withdrawal");
        Ok(())
    }

    pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<(), AdminServiceError> {
        let deleted = User::delete(pool, user_id).await?;
        if !deleted {
            return Err(AdminServiceError::UserNotFound(user_id));
        }
        Ok(())
    }
}
