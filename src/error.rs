//! The kernel's error surface.
//!
//! Every failure is recoverable: an operation either succeeds and mutates the
//! handle, or fails and leaves it unchanged and usable. There are no partial
//! successes and no fatal states.

use thiserror::Error;

/// Flat error taxonomy for every engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration rejected at handle creation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// Order rejected during validation.
    #[error("invalid order: {reason}")]
    InvalidOrder { reason: &'static str },

    /// An order with this id is already live.
    #[error("order {order_id} is already live")]
    DuplicateId { order_id: u64 },

    /// The open-order set is at capacity.
    #[error("open-order capacity ({capacity}) reached")]
    OrderBookFull { capacity: usize },

    /// Cancellation targeted an id with no live order.
    #[error("no live order with id {order_id}")]
    NotFound { order_id: u64 },

    /// A tick carried a non-finite quantity or an undecodable side byte.
    #[error("invalid tick: {reason}")]
    InvalidTick { reason: String },

    /// Batch slices disagree on length.
    #[error(
        "batch length mismatch: timestamps={timestamps}, price_ticks={price_ticks}, \
         qtys={qtys}, sides={sides}"
    )]
    LengthMismatch {
        timestamps: usize,
        price_ticks: usize,
        qtys: usize,
        sides: usize,
    },
}
