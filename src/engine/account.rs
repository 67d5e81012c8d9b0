//! Account state — cash, signed position, entry price, and realized P&L.
//!
//! Quantities are held as signed 64-bit micro-units (real quantity scaled by
//! 1,000,000 and truncated toward zero). The scaling is strictly internal:
//! every monetary computation descales first, and the public surface speaks
//! real-valued quantities only.

use super::costs::CostModel;
use crate::domain::Side;

/// Micro-units per real quantity unit.
pub(crate) const QTY_SCALE: f64 = 1_000_000.0;

/// Convert a real quantity to micro-units, truncating toward zero.
pub(crate) fn to_micro(qty: f64) -> i64 {
    (qty * QTY_SCALE) as i64
}

/// Convert micro-units back to a real quantity.
pub(crate) fn from_micro(micro: i64) -> f64 {
    micro as f64 / QTY_SCALE
}

/// Mutable account state, zeroed at creation and reset except for cash.
#[derive(Debug, Clone)]
pub(crate) struct AccountState {
    pub current_ts_ms: i64,
    pub cash: f64,
    /// Signed position in micro-units: positive long, negative short.
    pub position: i64,
    /// Weighted-average entry price in ticks; zero when flat.
    pub avg_entry_tick: f64,
    /// Cumulative gross realized P&L. Fees are reflected in cash only.
    pub realized_pnl: f64,
    pub last_tick_price: i64,
}

impl AccountState {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            current_ts_ms: 0,
            cash: initial_cash,
            position: 0,
            avg_entry_tick: 0.0,
            realized_pnl: 0.0,
            last_tick_price: 0,
        }
    }

    /// Apply one fill to the account.
    ///
    /// Cash moves by the full notional plus (buy) or minus (sell) the taker
    /// fee. The position update falls into one of four cases: opening from
    /// flat, adding to the same side, reducing against the open side, or
    /// flipping through flat. Realized P&L accrues gross on the reduced
    /// quantity; the weighted-average entry only moves on open/add/flip.
    pub fn apply_fill(
        &mut self,
        side: Side,
        qty: i64,
        fill_tick: i64,
        costs: &CostModel,
        tick_size: f64,
    ) {
        let fill_price = fill_tick as f64 * tick_size;
        let notional = fill_price * from_micro(qty);
        let fee = costs.taker_fee(notional);

        let delta = match side {
            Side::Buy => qty,
            Side::Sell => -qty,
        };
        match side {
            Side::Buy => self.cash -= notional + fee,
            Side::Sell => self.cash += notional - fee,
        }

        let old = self.position;
        let new = old + delta;

        if old == 0 {
            // Opening from flat.
            self.avg_entry_tick = fill_tick as f64;
        } else if (old > 0) == (delta > 0) {
            // Adding to the open side: micro-quantity-weighted average in
            // ticks. old, delta, and new share a sign, so the ratio is
            // well-defined and positive.
            let old_value = old as f64 * self.avg_entry_tick;
            let add_value = delta as f64 * fill_tick as f64;
            self.avg_entry_tick = (old_value + add_value) / new as f64;
        } else {
            // Reducing or flipping: realize gross P&L on the reduced portion.
            let reduced = from_micro(old.abs().min(qty));
            let exit_value = reduced * fill_tick as f64 * tick_size;
            let entry_value = reduced * self.avg_entry_tick * tick_size;
            if old > 0 {
                self.realized_pnl += exit_value - entry_value;
            } else {
                self.realized_pnl += entry_value - exit_value;
            }

            if new == 0 {
                self.avg_entry_tick = 0.0;
            } else if (old > 0) != (new > 0) {
                // Flipped through flat: the residual opens at the fill tick.
                self.avg_entry_tick = fill_tick as f64;
            }
        }

        self.position = new;
    }

    /// Mark the open position to the last observed tick price.
    pub fn unrealized_pnl(&self, tick_size: f64) -> f64 {
        if self.position == 0 {
            return 0.0;
        }
        let position = from_micro(self.position);
        let market_value = position * self.last_tick_price as f64 * tick_size;
        let entry_value = position * self.avg_entry_tick * tick_size;
        market_value - entry_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EngineConfig;

    fn frictionless() -> CostModel {
        CostModel::new(&EngineConfig::frictionless(0.0, 1.0))
    }

    #[test]
    fn micro_scaling_truncates_toward_zero() {
        assert_eq!(to_micro(1.5), 1_500_000);
        assert_eq!(to_micro(0.123456), 123_456);
        assert_eq!(to_micro(0.000_000_9), 0);
        assert_eq!(from_micro(2_500_000), 2.5);
    }

    #[test]
    fn buy_opens_long_at_fill_tick() {
        let mut account = AccountState::new(100_000.0);
        account.apply_fill(Side::Buy, to_micro(1.5), 100, &frictionless(), 1.0);

        assert_eq!(account.position, 1_500_000);
        assert_eq!(account.avg_entry_tick, 100.0);
        assert_eq!(account.cash, 100_000.0 - 150.0);
        assert_eq!(account.realized_pnl, 0.0);
    }

    #[test]
    fn adding_updates_weighted_average() {
        let mut account = AccountState::new(100_000.0);
        let costs = frictionless();
        account.apply_fill(Side::Buy, to_micro(1.0), 100, &costs, 1.0);
        account.apply_fill(Side::Buy, to_micro(3.0), 120, &costs, 1.0);

        assert_eq!(account.position, 4_000_000);
        // (1*100 + 3*120) / 4 = 115
        assert!((account.avg_entry_tick - 115.0).abs() < 1e-10);
    }

    #[test]
    fn reducing_realizes_gross_pnl_and_keeps_entry() {
        let mut account = AccountState::new(100_000.0);
        let costs = frictionless();
        account.apply_fill(Side::Buy, to_micro(1.5), 100, &costs, 1.0);
        account.apply_fill(Side::Sell, to_micro(0.5), 110, &costs, 1.0);

        assert_eq!(account.position, 1_000_000);
        assert_eq!(account.avg_entry_tick, 100.0);
        // 0.5 * (110 - 100) = 5
        assert!((account.realized_pnl - 5.0).abs() < 1e-10);
    }

    #[test]
    fn closing_flat_zeroes_entry_price() {
        let mut account = AccountState::new(100_000.0);
        let costs = frictionless();
        account.apply_fill(Side::Buy, to_micro(2.0), 100, &costs, 1.0);
        account.apply_fill(Side::Sell, to_micro(2.0), 90, &costs, 1.0);

        assert_eq!(account.position, 0);
        assert_eq!(account.avg_entry_tick, 0.0);
        assert!((account.realized_pnl + 20.0).abs() < 1e-10);
    }

    #[test]
    fn flip_realizes_old_side_and_opens_residual() {
        let mut account = AccountState::new(100_000.0);
        let costs = frictionless();
        account.apply_fill(Side::Buy, to_micro(4.0), 115, &costs, 1.0);
        account.apply_fill(Side::Sell, to_micro(6.0), 130, &costs, 1.0);

        // Realized on the closed 4.0: (130 - 115) * 4 = 60.
        assert!((account.realized_pnl - 60.0).abs() < 1e-10);
        assert_eq!(account.position, -2_000_000);
        assert_eq!(account.avg_entry_tick, 130.0);
    }

    #[test]
    fn short_side_realizes_with_inverted_sign() {
        let mut account = AccountState::new(100_000.0);
        let costs = frictionless();
        account.apply_fill(Side::Sell, to_micro(1.0), 100, &costs, 1.0);
        account.apply_fill(Side::Buy, to_micro(1.0), 90, &costs, 1.0);

        assert_eq!(account.position, 0);
        // Short from 100 covered at 90: +10.
        assert!((account.realized_pnl - 10.0).abs() < 1e-10);
    }

    #[test]
    fn unrealized_marks_to_last_tick() {
        let mut account = AccountState::new(100_000.0);
        account.apply_fill(Side::Buy, to_micro(2.0), 100, &frictionless(), 1.0);
        account.last_tick_price = 105;

        assert!((account.unrealized_pnl(1.0) - 10.0).abs() < 1e-10);

        account.last_tick_price = 95;
        assert!((account.unrealized_pnl(1.0) + 10.0).abs() < 1e-10);
    }

    #[test]
    fn unrealized_is_zero_when_flat() {
        let mut account = AccountState::new(100_000.0);
        account.last_tick_price = 12_345;
        assert_eq!(account.unrealized_pnl(0.01), 0.0);
    }

    #[test]
    fn fees_hit_cash_not_realized_pnl() {
        let mut account = AccountState::new(100_000.0);
        // 10 bps taker fee.
        let costs = CostModel::new(&EngineConfig::new(0.0, 10.0, 0.0, 0.0, 1.0));
        account.apply_fill(Side::Buy, to_micro(1.0), 100, &costs, 1.0);
        account.apply_fill(Side::Sell, to_micro(1.0), 100, &costs, 1.0);

        assert_eq!(account.realized_pnl, 0.0);
        // Two fees of 100 * 0.001 = 0.1 each.
        assert!((account.cash - (100_000.0 - 0.2)).abs() < 1e-9);
    }
}
