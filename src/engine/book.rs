//! The open-order set — a bounded, insertion-ordered collection of live
//! orders.
//!
//! Capacity is fixed and allocated up front; placement never reallocates.
//! Cancellation only deactivates a slot — reclamation happens at the next
//! tick step's compaction, so capacity accounting includes cancelled orders
//! that have not been compacted away yet.

use crate::domain::{Order, OrderKind, Side};

/// Maximum number of open-order slots per handle.
pub const MAX_OPEN_ORDERS: usize = 1024;

/// An accepted order with its quantity already converted to micro-units.
#[derive(Debug, Clone)]
pub(crate) struct LiveOrder {
    pub order_id: u64,
    pub kind: OrderKind,
    pub side: Side,
    /// Quantity in micro-units, always positive for a live order.
    pub qty: i64,
    pub price_tick: i64,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct OpenOrders {
    slots: Vec<LiveOrder>,
}

impl OpenOrders {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_OPEN_ORDERS),
        }
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_OPEN_ORDERS
    }

    /// True when a live (active) order carries this id.
    pub fn contains(&self, order_id: u64) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.active && slot.order_id == order_id)
    }

    /// Append an accepted order. The caller has already validated it and
    /// checked capacity and id uniqueness.
    pub fn push(&mut self, order: &Order, qty_micro: i64) {
        debug_assert!(!self.is_full());
        self.slots.push(LiveOrder {
            order_id: order.order_id,
            kind: order.kind,
            side: order.side,
            qty: qty_micro,
            price_tick: order.price_tick,
            active: true,
        });
    }

    /// Deactivate the live order with this id. Returns false when no live
    /// order matches.
    pub fn cancel(&mut self, order_id: u64) -> bool {
        for slot in &mut self.slots {
            if slot.active && slot.order_id == order_id {
                slot.active = false;
                return true;
            }
        }
        false
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LiveOrder> {
        self.slots.iter_mut()
    }

    /// Drop inactive slots, preserving insertion order among survivors.
    pub fn compact(&mut self) {
        self.slots.retain(|slot| slot.active);
    }

    /// Number of live (active) orders.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
