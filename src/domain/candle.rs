//! Tick-quantized OHLC candles.
//!
//! Prices are integer tick counts, like everywhere else in the kernel; the
//! monetary OHLC is recovered by multiplying with an explicit tick size.
//! Candles arrive as values — parsing and persistence live with the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One OHLC bar with tick-quantized prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Start of the bar, epoch milliseconds.
    pub ts_open: i64,
    /// End of the bar, epoch milliseconds.
    pub ts_close: i64,
    pub open_tick: i64,
    pub high_tick: i64,
    pub low_tick: i64,
    pub close_tick: i64,
    /// Volume traded during the bar, in real units.
    pub volume: f64,
    pub trade_count: i64,
}

impl Candle {
    /// Validate the bar's internal consistency.
    pub fn validate(&self) -> Result<(), CandleError> {
        if self.ts_open <= 0 || self.ts_close <= 0 || self.ts_close < self.ts_open {
            return Err(CandleError::InvalidTimestamps {
                ts_open: self.ts_open,
                ts_close: self.ts_close,
            });
        }
        if self.low_tick > self.high_tick {
            return Err(CandleError::InvalidRange {
                high_tick: self.high_tick,
                low_tick: self.low_tick,
            });
        }
        if !(self.low_tick..=self.high_tick).contains(&self.open_tick) {
            return Err(CandleError::OpenOutOfRange);
        }
        if !(self.low_tick..=self.high_tick).contains(&self.close_tick) {
            return Err(CandleError::CloseOutOfRange);
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(CandleError::NegativeVolume);
        }
        if self.trade_count < 0 {
            return Err(CandleError::NegativeTradeCount);
        }
        Ok(())
    }

    /// Check if the bar closed above its open.
    pub fn is_bullish(&self) -> bool {
        self.close_tick > self.open_tick
    }

    /// Bar range in ticks (high - low).
    pub fn range_ticks(&self) -> i64 {
        self.high_tick - self.low_tick
    }

    /// Recover monetary OHLC prices for the given tick size.
    pub fn to_prices(&self, tick_size: f64) -> CandlePrices {
        CandlePrices {
            open: self.open_tick as f64 * tick_size,
            high: self.high_tick as f64 * tick_size,
            low: self.low_tick as f64 * tick_size,
            close: self.close_tick as f64 * tick_size,
        }
    }

    /// Quantize monetary OHLC prices onto the tick grid (nearest tick).
    pub fn from_prices(
        ts_open: i64,
        ts_close: i64,
        prices: CandlePrices,
        volume: f64,
        trade_count: i64,
        tick_size: f64,
    ) -> Self {
        Self {
            ts_open,
            ts_close,
            open_tick: (prices.open / tick_size).round() as i64,
            high_tick: (prices.high / tick_size).round() as i64,
            low_tick: (prices.low / tick_size).round() as i64,
            close_tick: (prices.close / tick_size).round() as i64,
            volume,
            trade_count,
        }
    }
}

/// Monetary OHLC view of a candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlePrices {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandleError {
    #[error("invalid timestamps: ts_open={ts_open}, ts_close={ts_close}")]
    InvalidTimestamps { ts_open: i64, ts_close: i64 },

    #[error("invalid range: high_tick={high_tick}, low_tick={low_tick}")]
    InvalidRange { high_tick: i64, low_tick: i64 },

    #[error("open outside high/low range")]
    OpenOutOfRange,

    #[error("close outside high/low range")]
    CloseOutOfRange,

    #[error("volume must be finite and non-negative")]
    NegativeVolume,

    #[error("trade count must be non-negative")]
    NegativeTradeCount,
}
