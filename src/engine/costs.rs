//! Execution costs — spread widening and taker fees.
//!
//! Spread is a symmetric widening applied at fill time: buyers pay more,
//! sellers receive less. The offset is computed on the absolute tick count
//! and rounded up, so a non-zero spread never tightens the market.

use crate::domain::{EngineConfig, Side};

/// Cost model for fill friction.
///
/// The fill path is taker-only: fills are synthesized from tick crossings,
/// so every fill crosses the (synthetic) spread.
#[derive(Debug, Clone)]
pub(crate) struct CostModel {
    spread_bps: f64,
    taker_fee_bps: f64,
}

impl CostModel {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            spread_bps: config.spread_bps,
            taker_fee_bps: config.taker_fee_bps,
        }
    }

    /// Widen a base tick against the taker.
    ///
    /// `offset = ceil(|base_tick| * spread_bps / 10_000)`; buys fill at
    /// `base + offset`, sells at `base - offset`.
    pub fn fill_tick(&self, base_tick: i64, side: Side) -> i64 {
        if self.spread_bps == 0.0 {
            return base_tick;
        }
        let fraction = self.spread_bps / 10_000.0;
        let offset = (base_tick.abs() as f64 * fraction).ceil() as i64;
        match side {
            Side::Buy => base_tick + offset,
            Side::Sell => base_tick - offset,
        }
    }

    /// Taker fee on a fill's notional value.
    pub fn taker_fee(&self, notional: f64) -> f64 {
        notional * (self.taker_fee_bps / 10_000.0)
    }
}
