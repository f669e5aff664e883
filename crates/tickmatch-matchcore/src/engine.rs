//! Continuous matching engine.
//!
//! ```text
//! submit_buy / submit_sell
//!     -> Order::new            (InvalidOrder, nothing registered)
//!     -> registry.insert       (permanent)
//!     -> match_incoming        (fills against the opposite side, rests residual)
//!     -> invariant checks      (any failure halts the engine)
//! ```
//!
//! ## Price-time priority
//!
//! The incoming order takes liquidity from the best opposite level, oldest
//! order first, and always trades at the *resting* order's price. It keeps
//! going across levels until it is filled or the next resting price no
//! longer crosses. Whatever is left rests in the book.
//!
//! ## Fatal faults
//!
//! Registry insertion and book mutation are not atomic. If an invariant
//! check fails the engine records the reason and refuses every later
//! submission and summary with `EngineHalted`. Lookups keep working so the
//! state can be inspected.
//!
//! ## Concurrency
//!
//! Single writer. Mutation takes `&mut self` and there is no internal
//! locking; callers that share an engine must serialize access themselves.

use tickmatch_types::{BookSummary, Match, Order, OrderId, OrderSide, Result, TickmatchError};

use crate::{OrderRegistry, UnmatchedOrderBook, invariants};

#[derive(Debug, Default)]
pub struct MatchingEngine {
    registry: OrderRegistry,
    book: UnmatchedOrderBook,
    /// Reason for the first fatal fault, if any.
    halted: Option<String>,
}

impl MatchingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =================================================================
    // Submission
    // =================================================================

    pub fn submit_buy(&mut self, size: u64, price: u64) -> Result<OrderId> {
        self.submit(OrderSide::Buy, size, price)
    }

    pub fn submit_sell(&mut self, size: u64, price: u64) -> Result<OrderId> {
        self.submit(OrderSide::Sell, size, price)
    }

    /// Create, register and match a limit order. Returns its id.
    ///
    /// # Errors
    /// - `InvalidOrder` if `size` or `price` is zero; engine state is untouched
    /// - `EngineHalted` if an earlier submission hit a fatal fault
    /// - `InvariantViolation` if this submission left the engine inconsistent;
    ///   the engine is halted afterwards
    pub fn submit(&mut self, side: OrderSide, size: u64, price: u64) -> Result<OrderId> {
        self.ensure_running()?;

        let order = Order::new(price, size, side)?;
        let id = order.id;
        tracing::debug!(order = %id, %side, price, size, "Order submitted");

        let outcome = self
            .registry
            .insert(order)
            .and_then(|()| self.match_incoming(id))
            .and_then(|()| self.verify_after(id));

        match outcome {
            Ok(()) => Ok(id),
            Err(err) => Err(self.halt(err)),
        }
    }

    /// Run the matching loop for a registered, not yet matched order.
    fn match_incoming(&mut self, id: OrderId) -> Result<()> {
        let (side, price) = {
            let order = self.registry.get(&id)?;
            (order.side, order.price)
        };
        let opposite = side.opposite();

        loop {
            let remaining = self.registry.get(&id)?.unmatched_size();
            if remaining == 0 {
                // Fully filled on arrival: never touches the book.
                return Ok(());
            }

            let best = match self.book.peek_best(opposite) {
                Some(best_id) => self.registry.get(&best_id).map_err(|_| {
                    TickmatchError::invariant(format!("resting order {best_id} is not registered"))
                })?,
                None => break,
            };
            if !side.crosses(price, best.price) {
                break;
            }

            let best_id = best.id;
            let fill_size = remaining.min(best.unmatched_size());
            if fill_size == 0 {
                return Err(TickmatchError::invariant(format!(
                    "resting order {best_id} has nothing left to match"
                )));
            }
            let fill = match side {
                OrderSide::Buy => Match::new(id, best_id, fill_size, best.price),
                OrderSide::Sell => Match::new(best_id, id, fill_size, best.price),
            };
            tracing::debug!(
                buy_order = %fill.buy_order_id,
                sell_order = %fill.sell_order_id,
                price = fill.price,
                size = fill.size,
                "Orders matched"
            );

            self.registry.get_mut(&id)?.add_match(fill.clone());
            let best = self.registry.get_mut(&best_id)?;
            best.add_match(fill);

            if best.unmatched_size() == 0 {
                self.book.pop_best(opposite);
            }
        }

        let order = self.registry.get(&id)?;
        tracing::trace!(
            order = %id,
            %side,
            price,
            unmatched = order.unmatched_size(),
            "Order resting"
        );
        self.book.add(order);
        Ok(())
    }

    /// Post-submission integrity check over the incoming order, every order
    /// it traded with, and the book.
    fn verify_after(&self, id: OrderId) -> Result<()> {
        let order = self.registry.get(&id)?;
        invariants::check_order(order)?;
        for fill in order.matches() {
            let counterparty = match order.side {
                OrderSide::Buy => fill.sell_order_id,
                OrderSide::Sell => fill.buy_order_id,
            };
            invariants::check_order(self.registry.get(&counterparty)?)?;
        }
        invariants::check_book(&self.book, &self.registry)
    }

    fn ensure_running(&self) -> Result<()> {
        match &self.halted {
            Some(reason) => Err(TickmatchError::EngineHalted {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Record the first fatal fault and hand the error back.
    fn halt(&mut self, err: TickmatchError) -> TickmatchError {
        // Anything failing after registration is an integrity problem, even
        // a lookup miss, so it is reported as an invariant violation.
        let err = match err {
            TickmatchError::OrderNotFound(id) => {
                TickmatchError::invariant(format!("order {id} vanished during matching"))
            }
            other => other,
        };
        if self.halted.is_none() {
            tracing::error!(error = %err, "Matching engine halted");
            self.halted = Some(err.to_string());
        }
        err
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Look up an order; `None` if it was never submitted here.
    #[must_use]
    pub fn find_order(&self, id: &OrderId) -> Option<&Order> {
        self.registry.find(id)
    }

    /// Look up an order that must exist.
    ///
    /// # Errors
    /// `OrderNotFound` if it was never submitted here.
    pub fn get_order(&self, id: &OrderId) -> Result<&Order> {
        self.registry.get(id)
    }

    /// Resting size per price level, both sides.
    pub fn get_summary(&self) -> Result<BookSummary> {
        self.ensure_running()?;
        self.book.summary(&self.registry)
    }

    /// Read-only view of the resting orders.
    #[must_use]
    pub fn book(&self) -> &UnmatchedOrderBook {
        &self.book
    }

    /// Read-only view of every order ever accepted.
    #[must_use]
    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    /// Number of orders ever accepted.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }
}
