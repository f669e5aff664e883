//! A single price level in the unmatched order book.
//!
//! Orders at the same price are queued FIFO (time priority) using a
//! [`VecDeque`]. A level stores order ids only; the orders themselves live
//! in the engine's registry.

use std::collections::VecDeque;

use tickmatch_types::{OrderId, Result, TickmatchError};

use crate::OrderLookup;

/// All resting orders at one price.
///
/// The front of the deque has the highest time priority and is filled first.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// The price at this level.
    pub price: u64,
    orders: VecDeque<OrderId>,
}

impl PriceLevel {
    /// Create a new empty price level.
    #[must_use]
    pub fn new(price: u64) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    /// Add an order to the back of this level (lowest time priority).
    pub fn push_back(&mut self, order_id: OrderId) {
        self.orders.push_back(order_id);
    }

    /// Remove and return the front (oldest) order.
    pub fn pop_front(&mut self) -> Option<OrderId> {
        self.orders.pop_front()
    }

    /// Peek at the front order without removing it.
    #[must_use]
    pub fn front(&self) -> Option<OrderId> {
        self.orders.front().copied()
    }

    /// Queued order ids, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
        self.orders.iter()
    }

    /// Sum of the *current* unmatched size of every queued order.
    ///
    /// Reads through `orders`, so partial fills of the head order are
    /// reflected. Saturates at `u64::MAX`.
    ///
    /// # Errors
    /// `InvariantViolation` if a queued id is missing from `orders`.
    pub fn total_unmatched<L: OrderLookup + ?Sized>(&self, orders: &L) -> Result<u64> {
        self.orders.iter().try_fold(0u64, |total, id| {
            let order = orders.lookup(id).ok_or_else(|| {
                TickmatchError::invariant(format!(
                    "order {id} queued at price {} is not registered",
                    self.price
                ))
            })?;
            Ok(total.saturating_add(order.unmatched_size()))
        })
    }

    /// Returns `true` if there are no orders at this level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }
}
