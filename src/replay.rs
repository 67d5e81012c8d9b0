//! Replay drivers — feeding recorded market data through the engine.
//!
//! These helpers live outside the handle: the kernel allocates nothing after
//! creation, so history collection belongs to the caller's side of the
//! boundary.

use crate::domain::{AccountSnapshot, Candle, CandleError, Side, TickEvent};
use crate::engine::Engine;
use crate::error::EngineError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// A candle failed validation before replay started.
    #[error("candle {index} rejected: {source}")]
    BadCandle { index: usize, source: CandleError },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Map a candle to the tick the engine sees: the bar's close, stamped at the
/// bar's end. The aggressor side is approximated by the bar's direction.
fn close_tick_of(candle: &Candle) -> TickEvent {
    let side = if candle.is_bullish() {
        Side::Buy
    } else {
        Side::Sell
    };
    TickEvent::new(candle.ts_close, candle.close_tick, candle.volume, side)
}

fn validate_candles(candles: &[Candle]) -> Result<(), ReplayError> {
    for (index, candle) in candles.iter().enumerate() {
        candle
            .validate()
            .map_err(|source| ReplayError::BadCandle { index, source })?;
    }
    Ok(())
}

/// Drive the engine one tick per bar, at each bar's close.
///
/// Every candle is validated before the first one is applied, so a bad bar
/// leaves the engine untouched.
pub fn run_candles(engine: &mut Engine, candles: &[Candle]) -> Result<(), ReplayError> {
    validate_candles(candles)?;
    for candle in candles {
        engine.step_tick(&close_tick_of(candle))?;
    }
    Ok(())
}

/// Collects a snapshot after every step, building the account history and
/// equity curve that a reporting layer consumes.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    history: Vec<AccountSnapshot>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the engine's current snapshot.
    pub fn record(&mut self, engine: &Engine) {
        self.history.push(engine.snapshot());
    }

    /// Step one tick and capture the resulting snapshot.
    pub fn step_and_record(
        &mut self,
        engine: &mut Engine,
        tick: &TickEvent,
    ) -> Result<(), EngineError> {
        engine.step_tick(tick)?;
        self.record(engine);
        Ok(())
    }

    /// Replay candles as in [`run_candles`], capturing a snapshot per bar.
    pub fn run_candles(
        &mut self,
        engine: &mut Engine,
        candles: &[Candle],
    ) -> Result<(), ReplayError> {
        validate_candles(candles)?;
        for candle in candles {
            engine.step_tick(&close_tick_of(candle))?;
            self.record(engine);
        }
        Ok(())
    }

    pub fn history(&self) -> &[AccountSnapshot] {
        &self.history
    }

    pub fn last(&self) -> Option<&AccountSnapshot> {
        self.history.last()
    }

    /// Equity value at each recorded step.
    pub fn equity_curve(&self) -> Vec<f64> {
        self.history.iter().map(|snap| snap.equity).collect()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
