use sqlx::{Postgres, Transaction};

use crate::models::order::Direction;
use crate::models::{Order, OrderStatus, Trade};
use crate::services::ledger::{Ledger, LedgerError};
use crate::services::order_store::OrderStore;

pub const QUOTE_TICKER: &str = "RUB";

#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Runs the taker/maker matching loop against `taker` until it is fully
/// filled or no further counter-order is available, settling every trade in
/// the same transaction as the order placement. Returns the taker's final
/// state.
pub async fn process(
    tx: &mut Transaction<'_, Postgres>,
    mut taker: Order,
) -> Result<Order, MatchingError> {
    loop {
        let remaining = taker.remaining_qty();
        if remaining <= 0 {
            break;
        }

        let Some(maker) = OrderStore::find_best_match(tx, &taker.ticker, taker.direction, taker.price).await?
        else {
            break;
        };

        let trade_price = maker.price.expect("resting orders always carry a price");
        let trade_qty = remaining.min(maker.remaining_qty());
        if trade_qty <= 0 {
            break;
        }

        let (buy_order, sell_order) = match taker.direction {
            Direction::Buy => (&taker, &maker),
            Direction::Sell => (&maker, &taker),
        };
        let buyer_id = buy_order.user_id;
        let seller_id = sell_order.user_id;

        Ledger::settle(tx, buyer_id, seller_id, &taker.ticker, QUOTE_TICKER, trade_qty, trade_price).await?;

        Trade::insert(
            tx,
            &taker.ticker,
            trade_qty,
            trade_price,
            buy_order.id,
            sell_order.id,
            buyer_id,
            seller_id,
        )
        .await?;

        // Each side's reservation is drawn down by what the trade actually
        // consumed: the quote amount at trade_price for the buy side, the
        // plain quantity for the sell side.
        let (taker_consumed, maker_consumed) = match taker.direction {
            Direction::Buy => (trade_qty * trade_price, trade_qty),
            Direction::Sell => (trade_qty, trade_qty * trade_price),
        };

        taker = Order::add_fill(tx, taker.id, trade_qty, taker_consumed).await?;
        let maker_after = Order::add_fill(tx, maker.id, trade_qty, maker_consumed).await?;

        release_leftover_if_done(tx, &maker_after).await?;

        tracing::info!(
            taker_id = %taker.id, maker_id = %maker.id, ticker = %taker.ticker,
            qty = trade_qty, price = trade_price, "trade executed"
        );
    }

    release_leftover_if_done(tx, &taker).await?;
    Ok(taker)
}

/// Once an order is fully executed, any amount still sitting in its
/// `reserved` column is a price-improvement leftover (only possible on the
/// buy side) and must be handed back to available balance.
async fn release_leftover_if_done(
    tx: &mut Transaction<'_, Postgres>,
    order: &Order,
) -> Result<(), MatchingError> {
    if order.status == OrderStatus::Executed && order.reserved > 0 {
        let ticker = order.reserved_ticker(QUOTE_TICKER).to_string();
        Ledger::release(tx, order.user_id, &ticker, order.reserved).await?;
        Order::clear_reserved(tx, order.id).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ticker_is_rub() {
        assert_eq!(QUOTE_TICKER, "RUB");
    }
}
