//! Tick events — the market observations that drive the engine.

use serde::{Deserialize, Serialize};

/// Side of a tick or order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Decode the batch wire encoding: `0 = buy`, `1 = sell`.
    pub fn from_wire(raw: u8) -> Option<Side> {
        match raw {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// The opposite side.
    pub fn flipped(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A single market observation.
///
/// `price_tick` is an integer tick count; the monetary price is
/// `price_tick * tick_size`. The `qty` and `side` fields describe the observed
/// flow and are informational at the kernel boundary: fills are driven by the
/// engine's own open orders, never by tick flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    pub ts_ms: i64,
    pub price_tick: i64,
    pub qty: f64,
    pub side: Side,
}

impl TickEvent {
    pub fn new(ts_ms: i64, price_tick: i64, qty: f64, side: Side) -> Self {
        Self {
            ts_ms,
            price_tick,
            qty,
            side,
        }
    }
}
