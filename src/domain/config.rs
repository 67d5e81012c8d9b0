//! Engine configuration — fixed at handle creation, survives reset.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one engine handle.
///
/// Fees and spread are expressed in basis points (1 bp = 1/10,000). The maker
/// fee is accepted for forward compatibility but the current fill path always
/// charges the taker rate: fills are synthesized from tick crossings, so there
/// is no queue position from which to earn maker status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub maker_fee_bps: f64,
    pub taker_fee_bps: f64,
    pub spread_bps: f64,
    pub initial_cash: f64,
    /// Monetary value of one price tick. Must be strictly positive.
    pub tick_size: f64,
}

impl EngineConfig {
    pub fn new(
        maker_fee_bps: f64,
        taker_fee_bps: f64,
        spread_bps: f64,
        initial_cash: f64,
        tick_size: f64,
    ) -> Self {
        Self {
            maker_fee_bps,
            taker_fee_bps,
            spread_bps,
            initial_cash,
            tick_size,
        }
    }

    /// A zero-cost configuration, useful as a test baseline.
    pub fn frictionless(initial_cash: f64, tick_size: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, initial_cash, tick_size)
    }

    /// Validate the configuration invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "tick_size must be finite and > 0",
            });
        }
        if !self.maker_fee_bps.is_finite() || self.maker_fee_bps < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "maker_fee_bps must be finite and >= 0",
            });
        }
        if !self.taker_fee_bps.is_finite() || self.taker_fee_bps < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "taker_fee_bps must be finite and >= 0",
            });
        }
        if !self.spread_bps.is_finite() || self.spread_bps < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "spread_bps must be finite and >= 0",
            });
        }
        if !self.initial_cash.is_finite() {
            return Err(EngineError::InvalidConfig {
                reason: "initial_cash must be finite",
            });
        }
        Ok(())
    }
}
