//! The execution engine — a stateful handle over one simulated account.
//!
//! Control flow is strictly sequential: each tick advances simulated time,
//! scans the open-order set in insertion order, fills every order whose
//! condition is satisfied at the new tick, and compacts the set. Orders
//! placed between ticks become eligible at the next tick. The handle owns
//! its configuration, account state, and open-order set outright; inputs are
//! copied in at acceptance.

pub(crate) mod account;
pub(crate) mod book;
pub(crate) mod costs;

use crate::domain::{AccountSnapshot, EngineConfig, Order, OrderKind, Side, TickEvent};
use crate::error::EngineError;
use account::{from_micro, to_micro, AccountState};
use book::OpenOrders;
use costs::CostModel;

pub use book::MAX_OPEN_ORDERS;

/// Deterministic execution kernel for a single instrument and account.
///
/// All state lives behind this handle; distinct handles are fully
/// independent. The handle is single-threaded by construction — `&mut self`
/// on every mutating operation enforces one operation in flight.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    costs: CostModel,
    account: AccountState,
    book: OpenOrders,
}

impl Engine {
    /// Create a handle with a validated configuration.
    ///
    /// The open-order capacity is allocated here; no later operation
    /// allocates.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let costs = CostModel::new(&config);
        let account = AccountState::new(config.initial_cash);
        Ok(Self {
            config,
            costs,
            account,
            book: OpenOrders::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restore the initial account state, preserving configuration.
    pub fn reset(&mut self) {
        self.account = AccountState::new(self.config.initial_cash);
        self.book.clear();
    }

    /// Number of live open orders.
    pub fn open_order_count(&self) -> usize {
        self.book.live_count()
    }

    /// Accept an order into the open-order set.
    ///
    /// The order becomes eligible for fills at the next tick submission.
    /// Validation happens before any mutation, so a rejected order leaves
    /// the handle untouched.
    pub fn place_order(&mut self, order: &Order) -> Result<(), EngineError> {
        if self.book.is_full() {
            return Err(EngineError::OrderBookFull {
                capacity: book::MAX_OPEN_ORDERS,
            });
        }
        if self.book.contains(order.order_id) {
            return Err(EngineError::DuplicateId {
                order_id: order.order_id,
            });
        }
        if !order.qty.is_finite() || order.qty <= 0.0 {
            return Err(EngineError::InvalidOrder {
                reason: "qty must be finite and > 0",
            });
        }
        let qty_micro = to_micro(order.qty);
        if qty_micro <= 0 {
            // Too small to represent: the order could never move the account.
            return Err(EngineError::InvalidOrder {
                reason: "qty truncates to zero micro-units",
            });
        }
        if order.kind == OrderKind::Limit && order.price_tick <= 0 {
            return Err(EngineError::InvalidOrder {
                reason: "limit orders require price_tick > 0",
            });
        }

        self.book.push(order, qty_micro);
        Ok(())
    }

    /// Remove a live order from fill consideration.
    ///
    /// The slot itself is reclaimed at the next tick step's compaction.
    pub fn cancel_order(&mut self, order_id: u64) -> Result<(), EngineError> {
        if self.book.cancel(order_id) {
            Ok(())
        } else {
            Err(EngineError::NotFound { order_id })
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// The tick's `qty` and `side` are informational: fills are driven solely
    /// by the open-order set against the tick price.
    pub fn step_tick(&mut self, tick: &TickEvent) -> Result<(), EngineError> {
        if !tick.qty.is_finite() {
            return Err(EngineError::InvalidTick {
                reason: format!("qty {} is not finite", tick.qty),
            });
        }
        self.apply_tick(tick.ts_ms, tick.price_tick);
        Ok(())
    }

    /// Advance the simulation by a batch of ticks.
    ///
    /// Exactly equivalent to calling [`Engine::step_tick`] once per index in
    /// order. Side bytes use the wire encoding `0 = buy`, `1 = sell`. The
    /// whole batch is validated before the first tick is applied, so a
    /// failing batch leaves the handle unchanged.
    pub fn step_batch(
        &mut self,
        timestamps: &[i64],
        price_ticks: &[i64],
        qtys: &[f64],
        sides: &[u8],
    ) -> Result<(), EngineError> {
        let n = timestamps.len();
        if price_ticks.len() != n || qtys.len() != n || sides.len() != n {
            return Err(EngineError::LengthMismatch {
                timestamps: n,
                price_ticks: price_ticks.len(),
                qtys: qtys.len(),
                sides: sides.len(),
            });
        }
        for i in 0..n {
            if Side::from_wire(sides[i]).is_none() {
                return Err(EngineError::InvalidTick {
                    reason: format!("side byte {} at index {i} (must be 0 or 1)", sides[i]),
                });
            }
            if !qtys[i].is_finite() {
                return Err(EngineError::InvalidTick {
                    reason: format!("qty {} at index {i} is not finite", qtys[i]),
                });
            }
        }

        for i in 0..n {
            self.apply_tick(timestamps[i], price_ticks[i]);
        }
        Ok(())
    }

    /// Read the fully reconciled account snapshot.
    pub fn snapshot(&self) -> AccountSnapshot {
        let unrealized_pnl = self.account.unrealized_pnl(self.config.tick_size);
        AccountSnapshot {
            ts_ms: self.account.current_ts_ms,
            cash: self.account.cash,
            position: from_micro(self.account.position),
            avg_entry_price: self.account.avg_entry_tick,
            realized_pnl: self.account.realized_pnl,
            unrealized_pnl,
            equity: self.account.cash + unrealized_pnl,
        }
    }

    /// The per-tick core: record time and price, fill crossing orders in
    /// insertion order, compact the order set.
    fn apply_tick(&mut self, ts_ms: i64, price_tick: i64) {
        let Engine {
            ref config,
            ref costs,
            ref mut account,
            ref mut book,
        } = *self;

        account.current_ts_ms = ts_ms;
        account.last_tick_price = price_tick;

        for order in book.iter_mut() {
            if !order.active {
                continue;
            }
            let crosses = match (order.kind, order.side) {
                (OrderKind::Market, _) => true,
                (OrderKind::Limit, Side::Buy) => price_tick <= order.price_tick,
                (OrderKind::Limit, Side::Sell) => price_tick >= order.price_tick,
            };
            if !crosses {
                continue;
            }
            let base_tick = match order.kind {
                OrderKind::Market => price_tick,
                OrderKind::Limit => order.price_tick,
            };
            let fill_tick = costs.fill_tick(base_tick, order.side);
            // Later fills in the same tick observe this update.
            account.apply_fill(order.side, order.qty, fill_tick, costs, config.tick_size);
            order.active = false;
        }

        book.compact();
    }
}
