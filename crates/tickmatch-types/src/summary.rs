//! Read-only snapshots handed to callers outside the engine.
//!
//! Field names follow the public JSON shape of the REST API, so these types
//! serialize directly into responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{OrderId, OrderSide};

/// Snapshot of one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub size: u64,
    pub price: u64,
}

/// Snapshot of one order and its fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub size: u64,
    pub price: u64,
    #[serde(rename = "order_type")]
    pub side: OrderSide,
    pub unmatched_size: u64,
    pub matches: Vec<MatchSummary>,
}

/// Aggregated resting size per price level, for both sides.
///
/// Both maps iterate in ascending price order. The best buy level is the
/// *last* entry of `buy_levels`; the best sell level is the *first* entry of
/// `sell_levels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "BUY")]
    pub buy_levels: BTreeMap<u64, u64>,
    #[serde(rename = "SELL")]
    pub sell_levels: BTreeMap<u64, u64>,
}

impl BookSummary {
    /// `(price, total unmatched size)` of the highest buy level.
    #[must_use]
    pub fn best_buy_level(&self) -> Option<(u64, u64)> {
        self.buy_levels.iter().next_back().map(|(p, s)| (*p, *s))
    }

    /// `(price, total unmatched size)` of the lowest sell level.
    #[must_use]
    pub fn best_sell_level(&self) -> Option<(u64, u64)> {
        self.sell_levels.iter().next().map(|(p, s)| (*p, *s))
    }

    /// Buy levels from best (highest) to worst.
    pub fn buy_levels_best_first(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.buy_levels.iter().rev().map(|(p, s)| (*p, *s))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buy_levels.is_empty() && self.sell_levels.is_empty()
    }
}
