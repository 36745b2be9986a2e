use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Trade {
    pub id: Uuid,
    pub ticker: String,
    pub amount: i64,
    pub price: i64,
    pub timestamp: DateTime<Utc>,
    pub buy_order_id: Option<Uuid>,
    pub sell_order_id: Option<Uuid>,
    pub buyer_user_id: Option<Uuid>,
    pub seller_user_id: Option<Uuid>,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        ticker: &str,
        amount: i64,
        price: i64,
        buy_order_id: Uuid,
        sell_order_id: Uuid,
        buyer_user_id: Uuid,
        seller_user_id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO trades (ticker, amount, price, buy_order_id, sell_order_id, buyer_user_id, seller_user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(ticker)
        .bind(amount)
        .bind(price)
        .bind(buy_order_id)
        .bind(sell_order_id)
        .bind(buyer_user_id)
        .bind(seller_user_id)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn list_recent(pool: &PgPool, ticker: &str, limit: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM trades WHERE ticker = $1 ORDER BY \"timestamp\" DESC LIMIT $2",
        )
        .bind(ticker)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
