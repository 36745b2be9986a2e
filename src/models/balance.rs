use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Read-only view of a user's balance for one ticker. All mutation goes
/// through the ledger service, never through a direct UPDATE here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Balance {
    pub id: i64,
    pub user_id: Uuid,
    pub ticker: String,
    pub available: i64,
    pub locked: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Balance {
    pub async fn get_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM balances WHERE user_id = $1 ORDER BY ticker")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn get(pool: &PgPool, user_id: Uuid, ticker: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM balances WHERE user_id = $1 AND ticker = $2")
            .bind(user_id)
            .bind(ticker)
            .fetch_optional(pool)
            .await
    }

    pub async fn get_available(pool: &PgPool, user_id: Uuid, ticker: &str) -> Result<i64, sqlx::Error> {
        let balance = Self::get(pool, user_id, ticker).await?;
        Ok(balance.map(|b| b.available).unwrap_or(0))
    }
}
