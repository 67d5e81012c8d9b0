//! Domain types — the vocabulary of the kernel.
//!
//! Everything the engine accepts or returns is defined here: configuration,
//! tick events, orders, account snapshots, and tick-quantized candles. All
//! quantities on this surface are real-valued; the engine's internal
//! fixed-point representation never appears in these types.

pub mod candle;
pub mod config;
pub mod order;
pub mod snapshot;
pub mod tick;

pub use candle::{Candle, CandleError, CandlePrices};
pub use config::EngineConfig;
pub use order::{Order, OrderKind};
pub use snapshot::AccountSnapshot;
pub use tick::{Side, TickEvent};
