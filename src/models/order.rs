use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_direction", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    PartiallyExecuted,
    Executed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_cancellable(self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::PartiallyExecuted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ticker: String,
    pub direction: Direction,
    pub qty: i64,
    pub price: Option<i64>,
    pub status: OrderStatus,
    pub filled_qty: i64,
    pub reserved: i64,
    pub timestamp: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn remaining_qty(&self) -> i64 {
        self.qty - self.filled_qty
    }

    pub fn is_market(&self) -> bool {
        self.price.is_none()
    }

    /// The ticker that `reserved` is denominated in: the quote ticker for a
    /// buy order, the traded ticker itself for a sell order.
    pub fn reserved_ticker<'a>(&'a self, quote_ticker: &'a str) -> &'a str {
        match self.direction {
            Direction::Buy => quote_ticker,
            Direction::Sell => &self.ticker,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        user_id: Uuid,
        ticker: &str,
        direction: Direction,
        qty: i64,
        price: Option<i64>,
        reserved: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO orders (id, user_id, ticker, direction, qty, price, status, filled_qty, reserved)
             VALUES ($1, $2, $3, $4, $5, $6, 'new', 0, $7)
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(ticker)
        .bind(direction)
        .bind(qty)
        .bind(price)
        .bind(reserved)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Locks the row for update within the caller's transaction; used by cancel
    /// and by the matching loop before mutating fill state.
    pub async fn lock_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM orders WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM orders WHERE user_id = $1 ORDER BY \"timestamp\" DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    pub async fn get_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Applies a fill inside the matching transaction: bumps filled_qty,
    /// draws `consumed` out of the order's remaining reservation, and
    /// derives the new status from the updated fill total.
    pub async fn add_fill(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        fill_qty: i64,
        consumed: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE orders SET
                filled_qty = filled_qty + $2,
                reserved = reserved - $3,
                status = CASE WHEN filled_qty + $2 >= qty THEN 'executed' ELSE 'partially_executed' END,
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(fill_qty)
        .bind(consumed)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn cancel(tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE orders SET status = 'cancelled', reserved = 0, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut **tx)
        .await
    }

    /// Zeroes out the order's reservation once any leftover has been released
    /// back to available balance (called after a fill leaves the order fully executed).
    pub async fn clear_reserved(tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE orders SET reserved = 0 WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(qty: i64, filled_qty: i64, price: Option<i64>, direction: Direction) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            ticker: "AAA".to_string(),
            direction,
            qty,
            price,
            status: OrderStatus::New,
            filled_qty,
            reserved: 0,
            timestamp: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn remaining_qty_subtracts_fills() {
        let order = sample(5, 3, Some(100), Direction::Buy);
        assert_eq!(order.remaining_qty(), 2);
    }

    #[test]
    fn market_order_has_no_price() {
        assert!(sample(5, 0, None, Direction::Buy).is_market());
        assert!(!sample(5, 0, Some(100), Direction::Sell).is_market());
    }

    #[test]
    fn reserved_ticker_follows_direction() {
        let buy = sample(5, 0, Some(100), Direction::Buy);
        assert_eq!(buy.reserved_ticker("RUB"), "RUB");
        let sell = sample(5, 0, Some(100), Direction::Sell);
        assert_eq!(sell.reserved_ticker("RUB"), "AAA");
    }

    #[test]
    fn only_new_and_partial_are_cancellable() {
        assert!(OrderStatus::New.is_cancellable());
        assert!(OrderStatus::PartiallyExecuted.is_cancellable());
        assert!(!OrderStatus::Executed.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn direction_opposite_is_involutive() {
        assert_eq!(Direction::Buy.opposite(), Direction::Sell);
        assert_eq!(Direction::Sell.opposite(), Direction::Buy);
        assert_eq!(Direction::Buy.opposite().opposite(), Direction::Buy);
    }
}
