//! Orders — caller instructions held by the engine until filled or cancelled.

use super::tick::Side;
use serde::{Deserialize, Serialize};

/// Order kind.
///
/// Market orders fill at the next observed tick price; limit orders fill when
/// the tick price crosses the limit (buy: tick at or below the limit, sell:
/// tick at or above).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Limit,
    Market,
}

/// An open-order instruction.
///
/// `order_id` is caller-assigned and must be unique among live orders.
/// `price_tick` is the limit price in ticks and is ignored for market orders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    pub kind: OrderKind,
    pub side: Side,
    pub qty: f64,
    pub price_tick: i64,
}

impl Order {
    fn market(order_id: u64, side: Side, qty: f64) -> Self {
        Self {
            order_id,
            kind: OrderKind::Market,
            side,
            qty,
            price_tick: 0,
        }
    }

    fn limit(order_id: u64, side: Side, qty: f64, price_tick: i64) -> Self {
        Self {
            order_id,
            kind: OrderKind::Limit,
            side,
            qty,
            price_tick,
        }
    }

    pub fn market_buy(order_id: u64, qty: f64) -> Self {
        Order::market(order_id, Side::Buy, qty)
    }

    pub fn market_sell(order_id: u64, qty: f64) -> Self {
        Order::market(order_id, Side::Sell, qty)
    }

    pub fn limit_buy(order_id: u64, qty: f64, price_tick: i64) -> Self {
        Order::limit(order_id, Side::Buy, qty, price_tick)
    }

    pub fn limit_sell(order_id: u64, qty: f64, price_tick: i64) -> Self {
        Order::limit(order_id, Side::Sell, qty, price_tick)
    }
}
