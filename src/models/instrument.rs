use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Instrument {
    pub id: i32,
    pub ticker: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Instrument {
    pub async fn create(
        pool: &PgPool,
        ticker: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO instruments (ticker, name, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(ticker)
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await
    }

    pub async fn get(pool: &PgPool, ticker: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM instruments WHERE ticker = $1")
            .bind(ticker)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, ticker: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM instruments WHERE ticker = $1")
            .bind(ticker)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM instruments ORDER BY ticker")
            .fetch_all(pool)
            .await
    }

    /// Fails with a foreign-key violation if any order still references this ticker;
    /// the service layer turns that into a 409 rather than a 500.
    pub async fn delete(pool: &PgPool, ticker: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM instruments WHERE ticker = $1")
            .bind(ticker)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// True when a non-terminal order still references this ticker.
    pub async fn has_open_orders(pool: &PgPool, ticker: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE ticker = $1 AND status IN ('new', 'partially_executed')",
        )
        .bind(ticker)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }
}
