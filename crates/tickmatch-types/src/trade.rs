//! Fill records produced by the matching engine.
//!
//! A [`Match`] pairs one buy order with one sell order at a single price and
//! size. Both orders keep a copy of it in their fill history.

use serde::{Deserialize, Serialize};

use crate::{MatchSummary, OrderId};

/// Immutable record of one fill between a buy and a sell order.
///
/// The price is always the price of the order that was resting in the book
/// when the fill happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub size: u64,
    pub price: u64,
}

impl Match {
    #[must_use]
    pub fn new(buy_order_id: OrderId, sell_order_id: OrderId, size: u64, price: u64) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            size,
            price,
        }
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            buy_order_id: self.buy_order_id,
            sell_order_id: self.sell_order_id,
            size: self.size,
            price: self.price,
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Match[buy={} sell={}] {} @ {}",
            self.buy_order_id, self.sell_order_id, self.size, self.price,
        )
    }
}
