//! Account snapshot — the fully reconciled view of the account after a step.

use serde::{Deserialize, Serialize};

/// Point-in-time account state.
///
/// `position` is in real units (positive long, negative short) and
/// `avg_entry_price` is in ticks. `unrealized_pnl` marks the open position to
/// the last observed tick price; `equity = cash + unrealized_pnl`.
/// `realized_pnl` is gross: fees are reflected in `cash` only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub ts_ms: i64,
    pub cash: f64,
    pub position: f64,
    pub avg_entry_price: f64,
    pub realized_pnl: f64,
    pub unrealized_pnl: f64,
    pub equity: f64,
}

impl AccountSnapshot {
    /// True when the account holds no directional exposure.
    pub fn is_flat(&self) -> bool {
        self.position == 0.0
    }
}
