//! ticklab — deterministic tick-replay execution kernel for market
//! backtesting.
//!
//! The kernel consumes a stream of market ticks and open-order instructions
//! and produces, at every step, a fully reconciled account snapshot: cash,
//! signed position, weighted-average entry price, realized and unrealized
//! P&L, and equity. A strategy layer drives it to simulate the monetary
//! consequences of trading decisions against historical data.
//!
//! The engine reads no files, writes no files, and performs no logging; data
//! ingestion, persistence, and reporting are external collaborators. Prices
//! are integer tick counts (`price = tick * tick_size`), quantities are
//! real-valued on the public surface, and fees and spread are expressed in
//! basis points.

pub mod domain;
pub mod engine;
pub mod error;
pub mod replay;

pub use domain::{
    AccountSnapshot, Candle, CandleError, CandlePrices, EngineConfig, Order, OrderKind, Side,
    TickEvent,
};
pub use engine::{Engine, MAX_OPEN_ORDERS};
pub use error::EngineError;
pub use replay::{run_candles, ReplayError, SnapshotRecorder};
