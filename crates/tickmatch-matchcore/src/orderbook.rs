//! The unmatched order book.
//!
//! Holds only orders that could not be (fully) matched when they arrived.
//! Uses `BTreeMap` for price-level ordering:
//! - **Buys**: `BTreeMap<Reverse<u64>, PriceLevel>` -- highest price first
//! - **Sells**: `BTreeMap<u64, PriceLevel>` -- lowest price first
//!
//! Peek and pop are `O(log L)` in the number of distinct price levels.
//! Empty levels are removed eagerly so the first entry is always the best.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use tickmatch_types::{BookSummary, Order, OrderId, OrderSide, Result};

use crate::price_level::PriceLevel;

/// Read access to orders by id.
///
/// The book stores ids only and resolves them through this trait whenever
/// it needs live order state (summaries, invariant checks).
pub trait OrderLookup {
    fn lookup(&self, id: &OrderId) -> Option<&Order>;
}

impl OrderLookup for HashMap<OrderId, Order> {
    fn lookup(&self, id: &OrderId) -> Option<&Order> {
        self.get(id)
    }
}

/// Resting orders for one market, both sides.
#[derive(Debug, Default)]
pub struct UnmatchedOrderBook {
    /// Buy side: highest price first (`Reverse` key).
    buys: BTreeMap<Reverse<u64>, PriceLevel>,
    /// Sell side: lowest price first.
    sells: BTreeMap<u64, PriceLevel>,
    /// Number of queued orders across both sides.
    order_count: usize,
}

impl UnmatchedOrderBook {
    /// Create a new empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Queue `order` at the tail of the buy level for its price.
    ///
    /// The caller guarantees the order does not cross the best sell.
    pub fn add_buy(&mut self, order: &Order) {
        self.buys
            .entry(Reverse(order.price))
            .or_insert_with(|| PriceLevel::new(order.price))
            .push_back(order.id);
        self.order_count += 1;
    }

    /// Queue `order` at the tail of the sell level for its price.
    ///
    /// The caller guarantees the order does not cross the best buy.
    pub fn add_sell(&mut self, order: &Order) {
        self.sells
            .entry(order.price)
            .or_insert_with(|| PriceLevel::new(order.price))
            .push_back(order.id);
        self.order_count += 1;
    }

    /// Queue `order` on its own side.
    pub fn add(&mut self, order: &Order) {
        match order.side {
            OrderSide::Buy => self.add_buy(order),
            OrderSide::Sell => self.add_sell(order),
        }
    }

    // =================================================================
    // Best order access
    // =================================================================

    /// Oldest order at the highest buy price, without removing it.
    #[must_use]
    pub fn peek_best_buy(&self) -> Option<OrderId> {
        self.buys.values().next().and_then(PriceLevel::front)
    }

    /// Oldest order at the lowest sell price, without removing it.
    #[must_use]
    pub fn peek_best_sell(&self) -> Option<OrderId> {
        self.sells.values().next().and_then(PriceLevel::front)
    }

    /// Remove and return the best buy. Drops the level if it empties.
    pub fn pop_best_buy(&mut self) -> Option<OrderId> {
        let mut entry = self.buys.first_entry()?;
        let id = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if id.is_some() {
            self.order_count -= 1;
        }
        id
    }

    /// Remove and return the best sell. Drops the level if it empties.
    pub fn pop_best_sell(&mut self) -> Option<OrderId> {
        let mut entry = self.sells.first_entry()?;
        let id = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if id.is_some() {
            self.order_count -= 1;
        }
        id
    }

    #[must_use]
    pub fn peek_best(&self, side: OrderSide) -> Option<OrderId> {
        match side {
            OrderSide::Buy => self.peek_best_buy(),
            OrderSide::Sell => self.peek_best_sell(),
        }
    }

    pub fn pop_best(&mut self, side: OrderSide) -> Option<OrderId> {
        match side {
            OrderSide::Buy => self.pop_best_buy(),
            OrderSide::Sell => self.pop_best_sell(),
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Best (highest) buy price, or `None` if no buys.
    #[must_use]
    pub fn best_buy_price(&self) -> Option<u64> {
        self.buys.keys().next().map(|r| r.0)
    }

    /// Best (lowest) sell price, or `None` if no sells.
    #[must_use]
    pub fn best_sell_price(&self) -> Option<u64> {
        self.sells.keys().next().copied()
    }

    /// Spread = best_sell - best_buy. `None` if either side is empty or the
    /// book is crossed.
    #[must_use]
    pub fn spread(&self) -> Option<u64> {
        self.best_sell_price()?.checked_sub(self.best_buy_price()?)
    }

    /// Total number of orders currently in the book.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Number of distinct buy price levels.
    #[must_use]
    pub fn buy_depth(&self) -> usize {
        self.buys.len()
    }

    /// Number of distinct sell price levels.
    #[must_use]
    pub fn sell_depth(&self) -> usize {
        self.sells.len()
    }

    /// Returns `true` if the book has no orders on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Iterate buy levels from best (highest) to worst.
    pub fn buy_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.buys.values()
    }

    /// Iterate sell levels from best (lowest) to worst.
    pub fn sell_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.sells.values()
    }

    /// Aggregate current unmatched size per price, both sides.
    ///
    /// Pure read: no order is removed or reordered.
    ///
    /// # Errors
    /// `InvariantViolation` if a queued id is missing from `orders`.
    pub fn summary<L: OrderLookup + ?Sized>(&self, orders: &L) -> Result<BookSummary> {
        let mut summary = BookSummary::default();
        for level in self.buy_levels() {
            summary
                .buy_levels
                .insert(level.price, level.total_unmatched(orders)?);
        }
        for level in self.sell_levels() {
            summary
                .sell_levels
                .insert(level.price, level.total_unmatched(orders)?);
        }
        Ok(summary)
    }
}
